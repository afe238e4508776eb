//! Run command implementation.
//!
//! The `groundwork run` command performs the dependency bootstrap check:
//! detect a manifest in the project root and hand it to the installer.

use std::path::{Path, PathBuf};

use crate::bootstrap::{run_bootstrap, BootstrapOptions, InstallStrategy};
use crate::cli::args::RunArgs;
use crate::error::{GroundworkError, Result};
use crate::installer::UvInstaller;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(GroundworkError::ProjectRootNotFound {
                path: self.project_root.clone(),
            });
        }

        let strategy = match self.args.strategy.parse::<InstallStrategy>() {
            Ok(s) => s,
            Err(message) => {
                ui.error(&message);
                return Ok(CommandResult::failure(2));
            }
        };

        let options = BootstrapOptions {
            stop_on_error: self.args.stop_on_error,
            dry_run: self.args.dry_run,
            strategy,
        };

        // Stream installer output in verbose mode, capture otherwise.
        let capture = !ui.output_mode().shows_command_output();
        let installer = UvInstaller::with_program(&self.args.installer).capture_output(capture);

        let outcome = run_bootstrap(&self.project_root, &installer, &options, ui)?;

        if outcome.exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code))
        }
    }
}
