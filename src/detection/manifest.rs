//! Dependency manifest detection.
//!
//! Detection is a read-only scan of the project root: which of the known
//! manifest files exist as regular files. Only `requirements.txt` triggers
//! installation under the default strategy; the other files are reported so
//! status output can explain why nothing was installed.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Project files that drive the bootstrap decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    /// `requirements.txt`, the manifest consumed by the install strategy.
    Requirements,

    /// `pyproject.toml`. Reported only; its presence alone does not
    /// trigger installation.
    Pyproject,

    /// `uv.lock`, the lockfile consumed by the sync strategy.
    UvLock,
}

impl ManifestKind {
    /// The file name this kind matches in the project root.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Requirements => "requirements.txt",
            ManifestKind::Pyproject => "pyproject.toml",
            ManifestKind::UvLock => "uv.lock",
        }
    }

    /// All known manifest kinds, in display order.
    pub fn all() -> [ManifestKind; 3] {
        [
            ManifestKind::Requirements,
            ManifestKind::Pyproject,
            ManifestKind::UvLock,
        ]
    }
}

/// Which manifest files exist in a project root.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestScan {
    /// Path to `requirements.txt`, if present.
    pub requirements: Option<PathBuf>,

    /// Path to `pyproject.toml`, if present.
    pub pyproject: Option<PathBuf>,

    /// Path to `uv.lock`, if present.
    pub uv_lock: Option<PathBuf>,
}

impl ManifestScan {
    /// Scan a project root for known manifest files.
    pub fn scan(project_root: &Path) -> Self {
        Self {
            requirements: find(project_root, ManifestKind::Requirements),
            pyproject: find(project_root, ManifestKind::Pyproject),
            uv_lock: find(project_root, ManifestKind::UvLock),
        }
    }

    /// The manifest that triggers installation, when present.
    ///
    /// Only `requirements.txt` qualifies. A project carrying just
    /// `pyproject.toml` gets nothing installed.
    pub fn install_manifest(&self) -> Option<&Path> {
        self.requirements.as_deref()
    }

    /// The lockfile consumed by the sync strategy, when present.
    pub fn lockfile(&self) -> Option<&Path> {
        self.uv_lock.as_deref()
    }

    /// Whether no known manifest file was found at all.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_none() && self.pyproject.is_none() && self.uv_lock.is_none()
    }

    /// Path for a given manifest kind, if that file was found.
    pub fn path_for(&self, kind: ManifestKind) -> Option<&Path> {
        match kind {
            ManifestKind::Requirements => self.requirements.as_deref(),
            ManifestKind::Pyproject => self.pyproject.as_deref(),
            ManifestKind::UvLock => self.uv_lock.as_deref(),
        }
    }
}

/// Check for a manifest as a regular file (directories don't count).
fn find(project_root: &Path, kind: ManifestKind) -> Option<PathBuf> {
    let path = project_root.join(kind.file_name());
    path.is_file().then_some(path)
}
