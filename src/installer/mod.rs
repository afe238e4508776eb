//! The installer capability.
//!
//! The external package installer is modeled as a trait so the bootstrap
//! flow can be exercised in tests with a recording fake instead of a real
//! package manager. The production implementation is [`UvInstaller`].

pub mod mock;
pub mod uv;

pub use mock::{InstallerCall, MockInstaller};
pub use uv::UvInstaller;

use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Outcome of one installer invocation.
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    /// The command that ran, in display form.
    pub command: String,

    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard error. Empty when output was inherited.
    pub stderr: String,

    /// How long the invocation took.
    pub duration: Duration,
}

impl InstallOutcome {
    /// Whether the installer exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code to propagate under strict-failure mode.
    ///
    /// A signal-killed installer has no code; report generic failure.
    pub fn propagated_code(&self) -> i32 {
        self.exit_code.unwrap_or(1)
    }
}

/// An external package installer.
pub trait Installer {
    /// Installer name for display (e.g. "uv").
    fn name(&self) -> &str;

    /// Whether the installer binary can be run at all.
    fn is_available(&self) -> bool;

    /// Installer version line, when it can be determined.
    fn version(&self) -> Option<String>;

    /// Install the packages listed in a manifest file.
    fn install(&self, manifest: &Path) -> Result<InstallOutcome>;

    /// Synchronize the project environment from its lockfile.
    fn sync(&self, project_root: &Path) -> Result<InstallOutcome>;

    /// Display form of the install command for a manifest.
    fn render_install(&self, manifest: &Path) -> String;

    /// Display form of the sync command.
    fn render_sync(&self) -> String;
}
