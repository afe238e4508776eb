//! Mock installer for testing.
//!
//! `MockInstaller` implements the [`Installer`] trait and records every
//! invocation so tests can assert on the arguments the bootstrap flow
//! passed, without running a real package manager.
//!
//! # Example
//!
//! ```
//! use groundwork::installer::{Installer, MockInstaller};
//! use std::path::Path;
//!
//! let installer = MockInstaller::new();
//! installer.install(Path::new("/p/requirements.txt")).unwrap();
//!
//! assert_eq!(installer.install_calls().len(), 1);
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

use super::{InstallOutcome, Installer};

/// One recorded installer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerCall {
    /// `install` was called with this manifest path.
    Install(PathBuf),

    /// `sync` was called with this project root.
    Sync(PathBuf),
}

/// Recording installer for tests.
#[derive(Debug)]
pub struct MockInstaller {
    available: bool,
    exit_code: i32,
    calls: RefCell<Vec<InstallerCall>>,
}

impl MockInstaller {
    /// Create a mock that is available and succeeds.
    pub fn new() -> Self {
        Self {
            available: true,
            exit_code: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Create a mock whose invocations exit with the given code.
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::new()
        }
    }

    /// Create a mock that reports itself as not installed.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<InstallerCall> {
        self.calls.borrow().clone()
    }

    /// Manifest paths passed to `install`.
    pub fn install_calls(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                InstallerCall::Install(p) => Some(p.clone()),
                InstallerCall::Sync(_) => None,
            })
            .collect()
    }

    /// Whether no invocation was recorded at all.
    pub fn was_never_invoked(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    fn outcome(&self, command: String) -> InstallOutcome {
        let stderr = if self.exit_code == 0 {
            String::new()
        } else {
            "mock installer failure\n".to_string()
        };

        InstallOutcome {
            command,
            exit_code: Some(self.exit_code),
            stderr,
            duration: Duration::ZERO,
        }
    }
}

impl Default for MockInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for MockInstaller {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn version(&self) -> Option<String> {
        self.available.then(|| "mock 0.0.0".to_string())
    }

    fn install(&self, manifest: &Path) -> Result<InstallOutcome> {
        self.calls
            .borrow_mut()
            .push(InstallerCall::Install(manifest.to_path_buf()));
        Ok(self.outcome(self.render_install(manifest)))
    }

    fn sync(&self, project_root: &Path) -> Result<InstallOutcome> {
        self.calls
            .borrow_mut()
            .push(InstallerCall::Sync(project_root.to_path_buf()));
        Ok(self.outcome(self.render_sync()))
    }

    fn render_install(&self, manifest: &Path) -> String {
        format!("mock add -r {}", manifest.display())
    }

    fn render_sync(&self) -> String {
        "mock sync".to_string()
    }
}
