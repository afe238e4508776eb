//! External command execution.
//!
//! Commands are spawned directly (program + argument vector) rather than
//! through a shell. The invocations here are constructed by the tool, never
//! user-supplied shell syntax, so bypassing the shell avoids quoting issues
//! with paths in arguments.

use crate::error::{GroundworkError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output. Empty when output was inherited.
    pub stdout: String,

    /// Captured standard error. Empty when output was inherited.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout/stderr (if false, the child inherits both and its
    /// output streams straight to the terminal).
    pub capture_output: bool,
}

/// Render a program and its arguments as a single display string.
pub fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

/// Run a program with arguments and wait for it to finish.
pub fn execute(program: &str, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let map_spawn_err = |_| GroundworkError::CommandFailed {
        command: render_command(program, args),
        code: None,
    };

    let (status, stdout, stderr) = if options.capture_output {
        cmd.stdin(Stdio::null());
        let output = cmd.output().map_err(map_spawn_err)?;
        (
            output.status,
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        let status = cmd.status().map_err(map_spawn_err)?;
        (status, String::new(), String::new())
    };

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration: start.elapsed(),
    })
}

/// Run a program quietly and report only whether it exited zero.
///
/// Spawn failures (e.g. the program is not on PATH) count as failure.
pub fn execute_check(program: &str, args: &[String]) -> bool {
    let options = CommandOptions {
        capture_output: true,
        ..Default::default()
    };

    execute(program, args, &options)
        .map(|r| r.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn execute_successful_command() {
        let options = CommandOptions {
            capture_output: true,
            ..Default::default()
        };

        let result = execute("echo", &args(&["hello"]), &options).unwrap();

        assert!(result.success());
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let options = CommandOptions {
            capture_output: true,
            ..Default::default()
        };

        let result = execute("false", &[], &options).unwrap();

        assert!(!result.success());
        assert_ne!(result.exit_code, Some(0));
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let options = CommandOptions {
            capture_output: true,
            ..Default::default()
        };

        let err = execute("definitely-not-a-real-binary", &[], &options).unwrap_err();

        assert!(matches!(
            err,
            GroundworkError::CommandFailed { code: None, .. }
        ));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture_output: true,
        };

        let result = execute("pwd", &[], &options).unwrap();

        assert!(result.success());
    }

    #[test]
    fn execute_check_returns_bool() {
        assert!(execute_check("true", &[]));
        assert!(!execute_check("false", &[]));
        assert!(!execute_check("definitely-not-a-real-binary", &[]));
    }

    #[test]
    fn command_result_tracks_duration() {
        let options = CommandOptions {
            capture_output: true,
            ..Default::default()
        };

        let result = execute("echo", &args(&["fast"]), &options).unwrap();

        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn render_command_joins_program_and_args() {
        let rendered = render_command("uv", &args(&["add", "-r", "requirements.txt"]));
        assert_eq!(rendered, "uv add -r requirements.txt");
    }

    #[test]
    fn render_command_without_args() {
        assert_eq!(render_command("uv", &[]), "uv");
    }
}
