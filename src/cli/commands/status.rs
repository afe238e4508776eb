//! Status command implementation.
//!
//! The `groundwork status` command reports what detection sees in the
//! project root and whether the installer is available, without invoking
//! anything. `--json` emits a machine-readable report.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::detection::{ManifestKind, ManifestScan};
use crate::error::{GroundworkError, Result};
use crate::installer::{Installer, UvInstaller};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    args: StatusArgs,
}

/// Machine-readable status report.
#[derive(Debug, Serialize)]
struct StatusReport {
    project_root: PathBuf,
    manifests: ManifestScan,
    installer: InstallerReport,
}

#[derive(Debug, Serialize)]
struct InstallerReport {
    name: String,
    available: bool,
    version: Option<String>,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn report(&self, installer: &dyn Installer) -> StatusReport {
        StatusReport {
            project_root: self.project_root.clone(),
            manifests: ManifestScan::scan(&self.project_root),
            installer: InstallerReport {
                name: installer.name().to_string(),
                available: installer.is_available(),
                version: installer.version(),
            },
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(GroundworkError::ProjectRootNotFound {
                path: self.project_root.clone(),
            });
        }

        let installer = UvInstaller::with_program(&self.args.installer);
        let report = self.report(&installer);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| GroundworkError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Dependency status");

        ui.message("Manifests:");
        for kind in ManifestKind::all() {
            let mark = if report.manifests.path_for(kind).is_some() {
                "✓"
            } else {
                "·"
            };
            ui.message(&format!("  {} {}", mark, kind.file_name()));
        }

        ui.message("");
        match (report.installer.available, &report.installer.version) {
            (true, Some(version)) => {
                ui.message(&format!("Installer: {} (available)", version));
            }
            (true, None) => {
                ui.message(&format!(
                    "Installer: {} (available)",
                    report.installer.name
                ));
            }
            (false, _) => {
                ui.warning(&format!(
                    "Installer '{}' not found on PATH",
                    report.installer.name
                ));
            }
        }

        if report.manifests.install_manifest().is_some() {
            ui.message("");
            ui.message("Run `groundwork run` to install dependencies");
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn status_lists_detected_manifests() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "requests\n").unwrap();

        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("✓ requirements.txt"));
        assert!(ui.has_message("· pyproject.toml"));
        assert!(ui.has_message("groundwork run"));
    }

    #[test]
    fn status_without_manifests_omits_run_hint() {
        let temp = TempDir::new().unwrap();

        let cmd = StatusCommand::new(temp.path(), StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(!ui.has_message("groundwork run"));
    }

    #[test]
    fn status_warns_about_missing_installer() {
        let temp = TempDir::new().unwrap();
        let args = StatusArgs {
            installer: "definitely-not-a-real-binary".to_string(),
            ..Default::default()
        };

        let cmd = StatusCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("not found on PATH"));
    }

    #[test]
    fn missing_project_root_is_an_error() {
        let cmd = StatusCommand::new(Path::new("/definitely/not/a/project"), StatusArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, GroundworkError::ProjectRootNotFound { .. }));
    }

    #[test]
    fn report_serializes_to_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("uv.lock"), "").unwrap();

        let cmd = StatusCommand::new(
            temp.path(),
            StatusArgs {
                installer: "definitely-not-a-real-binary".to_string(),
                json: true,
            },
        );
        let installer = UvInstaller::with_program("definitely-not-a-real-binary");
        let report = cmd.report(&installer);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["manifests"]["uv_lock"].is_string());
        assert!(json["manifests"]["requirements"].is_null());
        assert_eq!(json["installer"]["available"], false);
    }
}
