//! Filesystem-based profile storage implementation.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::file::ProfileFile;
use crate::store::{validate_layout_name, ProfileStore};

/// Filesystem implementation of the ProfileStore trait.
///
/// Stores one pretty-printed JSON file per layout name in a directory:
/// `<dir>/<layout_name>.json`.
pub struct FilesystemStore {
    dir: PathBuf,
}

impl FilesystemStore {
    /// Create a new FilesystemStore with the given directory.
    ///
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file for a layout name.
    pub fn file_path(&self, layout_name: &str) -> Result<PathBuf> {
        validate_layout_name(layout_name)?;
        Ok(self.dir.join(format!("{layout_name}.json")))
    }
}

impl ProfileStore for FilesystemStore {
    fn save(&self, file: &ProfileFile) -> Result<()> {
        let path = self.file_path(&file.layout_name)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {}", self.dir.display()))?;

        std::fs::write(&path, file.to_json_pretty()?)
            .with_context(|| format!("Failed to write profile {}", path.display()))?;
        tracing::info!("Stored profile to {}", path.display());
        Ok(())
    }

    fn load(&self, layout_name: &str) -> Result<Option<ProfileFile>> {
        let path = self.file_path(layout_name)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let file = ProfileFile::from_json(&content)
            .with_context(|| format!("Failed to parse profile {}", path.display()))?;
        tracing::debug!(columns = file.profile.len(), "Loaded profile from {}", path.display());
        Ok(Some(file))
    }
}
