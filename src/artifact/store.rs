//! On-disk artifact location resolution.

use std::path::{Path, PathBuf};

/// Resolves the on-disk location of the component artifact.
///
/// The location is always `dir/filename` — derived from configuration,
/// never persisted, and recomputed on demand.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    filename: String,
}

impl ArtifactStore {
    /// Create a store for `filename` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
        }
    }

    /// Full path of the artifact file.
    pub fn location(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Directory the artifact lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns `true` when a usable artifact file is present on disk.
    pub fn is_present(&self) -> bool {
        self.location().is_file()
    }
}
