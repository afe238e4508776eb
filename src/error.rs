//! Error types for groundwork operations.
//!
//! This module defines [`GroundworkError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GroundworkError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GroundworkError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for groundwork operations.
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// The requested project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// The installer binary is missing or cannot be run.
    #[error("Installer '{installer}' is not available: {message}")]
    InstallerNotFound {
        installer: String,
        message: String,
    },

    /// An external command could not be spawned or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for groundwork operations.
pub type Result<T> = std::result::Result<T, GroundworkError>;
