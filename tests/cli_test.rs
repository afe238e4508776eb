//! Integration tests for the groundwork CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn groundwork(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.current_dir(project);
    // Force the non-interactive UI so message routing is deterministic:
    // status lines on stdout, warnings/errors on stderr.
    cmd.env("CI", "1");
    cmd
}

/// Write an executable installer stub that records its arguments and exits
/// with the given code.
#[cfg(unix)]
fn write_stub_installer(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("uv-stub");
    let log = dir.join("invocation.txt");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n",
        log.display(),
        exit_code
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
fn recorded_invocations(dir: &Path) -> String {
    fs::read_to_string(dir.join("invocation.txt")).unwrap_or_default()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dependency bootstrap"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn run_in_empty_project_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = groundwork(temp.path());
    cmd.arg("run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no dependencies installed"));
    Ok(())
}

#[test]
fn no_subcommand_defaults_to_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = groundwork(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Checking project dependencies"));
    Ok(())
}

#[test]
fn pyproject_alone_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("pyproject.toml"), "[project]\n")?;

    let mut cmd = groundwork(temp.path());
    cmd.arg("run");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no dependencies installed"))
        .stdout(predicate::str::contains("pyproject.toml present"));
    Ok(())
}

#[test]
fn unknown_strategy_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = groundwork(temp.path());
    cmd.args(["run", "--strategy", "yolo"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown install strategy"));
    Ok(())
}

#[test]
fn missing_project_root_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = groundwork(temp.path());
    cmd.args(["--project", "/definitely/not/a/project", "run"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Project root not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn run_invokes_installer_with_manifest_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;
    let stub = write_stub_installer(temp.path(), 0);

    let mut cmd = groundwork(temp.path());
    cmd.args(["run", "--installer", &stub.display().to_string()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found requirements.txt"));

    let recorded = recorded_invocations(temp.path());
    assert!(recorded.contains("add -r"));
    assert!(recorded.contains("requirements.txt"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn installer_failure_exits_zero_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;
    let stub = write_stub_installer(temp.path(), 3);

    let mut cmd = groundwork(temp.path());
    cmd.args(["run", "--installer", &stub.display().to_string()]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("exit code 3"))
        .stderr(predicate::str::contains("continuing"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn installer_failure_propagates_with_stop_on_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;
    let stub = write_stub_installer(temp.path(), 7);

    let mut cmd = groundwork(temp.path());
    cmd.args([
        "run",
        "--stop-on-error",
        "--installer",
        &stub.display().to_string(),
    ]);
    cmd.assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("exit code 7"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn dry_run_prints_command_without_invoking() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;
    let stub = write_stub_installer(temp.path(), 0);

    let mut cmd = groundwork(temp.path());
    cmd.args(["run", "--dry-run", "--installer", &stub.display().to_string()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("add -r"))
        .stdout(predicate::str::contains("Dry-run"));

    assert!(!temp.path().join("invocation.txt").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn sync_strategy_uses_lockfile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("uv.lock"), "")?;
    let stub = write_stub_installer(temp.path(), 0);

    let mut cmd = groundwork(temp.path());
    cmd.args([
        "run",
        "--strategy",
        "sync",
        "--installer",
        &stub.display().to_string(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found uv.lock"));

    let recorded = recorded_invocations(temp.path());
    assert!(recorded.contains("sync"));
    Ok(())
}

#[test]
fn sync_strategy_without_lockfile_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;

    let mut cmd = groundwork(temp.path());
    cmd.args(["run", "--strategy", "sync"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No uv.lock found"));
    Ok(())
}

#[test]
fn status_lists_manifests() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;

    let mut cmd = groundwork(temp.path());
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("requirements.txt"))
        .stdout(predicate::str::contains("pyproject.toml"));
    Ok(())
}

#[test]
fn status_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("requirements.txt"), "requests\n")?;

    let mut cmd = groundwork(temp.path());
    cmd.args(["status", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(json["manifests"]["requirements"].is_string());
    assert!(json["manifests"]["pyproject"].is_null());
    assert!(json["installer"]["name"].is_string());
    Ok(())
}

#[test]
fn completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("groundwork"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("groundwork"));
    Ok(())
}
