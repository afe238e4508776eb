//! The dependency bootstrap check.
//!
//! One linear sequence with a single branch: look for a dependency manifest
//! in the project root, and when one is found hand it to the installer.
//! No retries, no state across invocations, no scheduling.
//!
//! The failure policy is explicit: with `stop_on_error` the installer's
//! exit code becomes the process exit code; without it (the default) a
//! failing installer is reported as a warning and the run still exits 0.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::detection::ManifestScan;
use crate::error::{GroundworkError, Result};
use crate::installer::{InstallOutcome, Installer};
use crate::ui::UserInterface;

/// Tag prefixed to every bootstrap status line.
pub const STATUS_TAG: &str = "[groundwork]";

/// Maximum captured stderr lines replayed after a failed install.
const STDERR_TAIL_LINES: usize = 8;

/// How dependencies are brought in when a manifest is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallStrategy {
    /// Add packages from `requirements.txt`.
    #[default]
    Add,

    /// Synchronize the environment from `uv.lock`.
    Sync,
}

impl FromStr for InstallStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "sync" => Ok(Self::Sync),
            _ => Err(format!(
                "unknown install strategy: {} (expected 'add' or 'sync')",
                s
            )),
        }
    }
}

impl fmt::Display for InstallStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallStrategy::Add => write!(f, "add"),
            InstallStrategy::Sync => write!(f, "sync"),
        }
    }
}

/// Options controlling a bootstrap run.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Propagate a failing installer's exit code instead of continuing.
    pub stop_on_error: bool,

    /// Print the installer command without executing it.
    pub dry_run: bool,

    /// Install strategy.
    pub strategy: InstallStrategy,
}

/// What a bootstrap run did.
#[derive(Debug)]
pub struct BootstrapOutcome {
    /// Manifest (or lockfile) the run acted on, when one was found.
    pub manifest: Option<PathBuf>,

    /// Installer invocation result, when one ran.
    pub install: Option<InstallOutcome>,

    /// Process exit code under the configured failure policy.
    pub exit_code: i32,
}

impl BootstrapOutcome {
    fn nothing_installed() -> Self {
        Self {
            manifest: None,
            install: None,
            exit_code: 0,
        }
    }

    /// Whether an installer invocation ran and succeeded.
    pub fn installed(&self) -> bool {
        self.install.as_ref().map(|o| o.success()).unwrap_or(false)
    }
}

/// Run the bootstrap check against a project root.
///
/// Emits the fixed status lines, branches on manifest presence, and invokes
/// the installer through the injected capability. The returned outcome
/// carries the exit code the process should terminate with.
pub fn run_bootstrap(
    project_root: &Path,
    installer: &dyn Installer,
    options: &BootstrapOptions,
    ui: &mut dyn UserInterface,
) -> Result<BootstrapOutcome> {
    ui.message(&format!(
        "{} Checking project dependencies in {}",
        STATUS_TAG,
        project_root.display()
    ));

    let scan = ManifestScan::scan(project_root);
    tracing::debug!(
        "Manifest scan: requirements={} pyproject={} uv_lock={}",
        scan.requirements.is_some(),
        scan.pyproject.is_some(),
        scan.uv_lock.is_some()
    );

    match options.strategy {
        InstallStrategy::Add => match scan.install_manifest() {
            Some(manifest) => {
                let manifest = manifest.to_path_buf();
                let command = installer.render_install(&manifest);
                ui.message(&format!(
                    "{} Found requirements.txt, running '{}'",
                    STATUS_TAG, command
                ));
                invoke(installer, Invocation::Install(manifest), options, ui)
            }
            None => {
                let mut line = format!(
                    "{} No requirements.txt found, no dependencies installed",
                    STATUS_TAG
                );
                if scan.pyproject.is_some() {
                    line.push_str(" (pyproject.toml present; use the sync strategy for uv projects)");
                }
                ui.message(&line);
                Ok(BootstrapOutcome::nothing_installed())
            }
        },
        InstallStrategy::Sync => match scan.lockfile() {
            Some(lockfile) => {
                let lockfile = lockfile.to_path_buf();
                let command = installer.render_sync();
                ui.message(&format!(
                    "{} Found uv.lock, running '{}'",
                    STATUS_TAG, command
                ));
                invoke(
                    installer,
                    Invocation::Sync {
                        project_root: project_root.to_path_buf(),
                        lockfile,
                    },
                    options,
                    ui,
                )
            }
            None => {
                ui.message(&format!(
                    "{} No uv.lock found, no dependencies installed",
                    STATUS_TAG
                ));
                Ok(BootstrapOutcome::nothing_installed())
            }
        },
    }
}

/// The installer operation selected by the strategy branch.
enum Invocation {
    Install(PathBuf),
    Sync {
        project_root: PathBuf,
        lockfile: PathBuf,
    },
}

impl Invocation {
    fn manifest(&self) -> &Path {
        match self {
            Invocation::Install(manifest) => manifest,
            Invocation::Sync { lockfile, .. } => lockfile,
        }
    }
}

fn invoke(
    installer: &dyn Installer,
    invocation: Invocation,
    options: &BootstrapOptions,
    ui: &mut dyn UserInterface,
) -> Result<BootstrapOutcome> {
    if options.dry_run {
        ui.message(&format!(
            "{} Dry-run: installer not invoked",
            STATUS_TAG
        ));
        return Ok(BootstrapOutcome {
            manifest: Some(invocation.manifest().to_path_buf()),
            install: None,
            exit_code: 0,
        });
    }

    if !installer.is_available() {
        return Err(GroundworkError::InstallerNotFound {
            installer: installer.name().to_string(),
            message: "not found on PATH (checked with '--version')".to_string(),
        });
    }

    // A spinner over streamed installer output would garble it; only show
    // one when output is being captured.
    let mut spinner = if ui.output_mode().shows_command_output() {
        None
    } else {
        Some(ui.start_spinner(&format!(
            "Installing dependencies with {}...",
            installer.name()
        )))
    };

    let result = match &invocation {
        Invocation::Install(manifest) => installer.install(manifest),
        Invocation::Sync { project_root, .. } => installer.sync(project_root),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(s) = spinner.as_mut() {
                s.finish_error("Installer invocation failed");
            }
            return Err(e);
        }
    };

    let exit_code = if outcome.success() {
        match spinner.as_mut() {
            Some(s) => s.finish_success("Dependencies installed"),
            None => ui.success("Dependencies installed"),
        }
        0
    } else {
        let code = outcome.propagated_code();
        if let Some(s) = spinner.as_mut() {
            s.finish_error(&format!("Installer exited with code {}", code));
        }
        replay_stderr_tail(&outcome, ui);

        if options.stop_on_error {
            ui.error(&format!(
                "Installer failed with exit code {}, stopping",
                code
            ));
            code
        } else {
            ui.warning(&format!(
                "Installer failed with exit code {}, continuing (stop-on-error disabled)",
                code
            ));
            0
        }
    };

    Ok(BootstrapOutcome {
        manifest: Some(invocation.manifest().to_path_buf()),
        install: Some(outcome),
        exit_code,
    })
}

/// Replay the tail of captured installer stderr so a failure inside a
/// spinner is not silent. No-op when output was inherited.
fn replay_stderr_tail(outcome: &InstallOutcome, ui: &mut dyn UserInterface) {
    let lines: Vec<&str> = outcome.stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    for line in &lines[start..] {
        ui.message(&format!("  {}", line));
    }
}
