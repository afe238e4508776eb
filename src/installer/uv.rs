//! uv-backed installer.
//!
//! Invokes `uv add -r <manifest>` for manifest installs and `uv sync` for
//! the lockfile strategy. The program name can be overridden to point at a
//! different binary (or a test stub).

use std::path::Path;

use crate::error::Result;
use crate::process::{execute, execute_check, render_command, CommandOptions};

use super::{InstallOutcome, Installer};

/// Installer implementation shelling out to `uv`.
#[derive(Debug, Clone)]
pub struct UvInstaller {
    program: String,
    capture_output: bool,
}

impl UvInstaller {
    /// Create an installer invoking `uv` from PATH.
    pub fn new() -> Self {
        Self::with_program("uv")
    }

    /// Create an installer invoking a specific program.
    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
            capture_output: true,
        }
    }

    /// Set whether installer output is captured or streamed to the terminal.
    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    fn install_args(manifest: &Path) -> Vec<String> {
        vec![
            "add".to_string(),
            "-r".to_string(),
            manifest.display().to_string(),
        ]
    }

    fn sync_args() -> Vec<String> {
        vec!["sync".to_string()]
    }

    fn run(&self, args: Vec<String>, cwd: Option<&Path>) -> Result<InstallOutcome> {
        let command = render_command(&self.program, &args);
        tracing::debug!("Invoking installer: {}", command);

        let options = CommandOptions {
            cwd: cwd.map(Path::to_path_buf),
            capture_output: self.capture_output,
        };
        let result = execute(&self.program, &args, &options)?;

        tracing::debug!(
            "Installer exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );

        Ok(InstallOutcome {
            command,
            exit_code: result.exit_code,
            stderr: result.stderr,
            duration: result.duration,
        })
    }
}

impl Default for UvInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for UvInstaller {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        execute_check(&self.program, &["--version".to_string()])
    }

    fn version(&self) -> Option<String> {
        let options = CommandOptions {
            capture_output: true,
            ..Default::default()
        };
        match execute(&self.program, &["--version".to_string()], &options) {
            Ok(result) if result.success() => {
                result.stdout.lines().next().map(|l| l.trim().to_string())
            }
            _ => None,
        }
    }

    fn install(&self, manifest: &Path) -> Result<InstallOutcome> {
        // Run in the manifest's directory so uv resolves the project there.
        self.run(Self::install_args(manifest), manifest.parent())
    }

    fn sync(&self, project_root: &Path) -> Result<InstallOutcome> {
        self.run(Self::sync_args(), Some(project_root))
    }

    fn render_install(&self, manifest: &Path) -> String {
        render_command(&self.program, &Self::install_args(manifest))
    }

    fn render_sync(&self) -> String {
        render_command(&self.program, &Self::sync_args())
    }
}
