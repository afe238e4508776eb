//! Project manifest detection.

pub mod manifest;

pub use manifest::{ManifestKind, ManifestScan};
