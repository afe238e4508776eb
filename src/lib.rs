//! Groundwork - Project dependency bootstrap automation.
//!
//! Groundwork replaces the ad-hoc `setup.sh` dependency check with a small
//! CLI: look for a dependency manifest in a project root and, when one is
//! found, hand it to an external installer (`uv`). The failure policy is
//! explicit and the installer is injected, so the whole flow is testable
//! without touching a real package manager.
//!
//! # Modules
//!
//! - [`bootstrap`] - The check-branch-invoke sequence and failure policy
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Manifest file detection
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Installer capability (uv implementation + test mock)
//! - [`process`] - External process execution
//! - [`ui`] - Terminal output, modes, and theming
//!
//! # Example
//!
//! ```
//! use groundwork::bootstrap::{run_bootstrap, BootstrapOptions};
//! use groundwork::installer::MockInstaller;
//! use groundwork::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let installer = MockInstaller::new();
//! let mut ui = MockUI::new();
//!
//! let outcome = run_bootstrap(
//!     temp.path(),
//!     &installer,
//!     &BootstrapOptions::default(),
//!     &mut ui,
//! )
//! .unwrap();
//!
//! // Nothing to install in an empty project.
//! assert_eq!(outcome.exit_code, 0);
//! assert!(installer.was_never_invoked());
//! ```

pub mod bootstrap;
pub mod cli;
pub mod detection;
pub mod error;
pub mod installer;
pub mod process;
pub mod ui;

pub use error::{GroundworkError, Result};
