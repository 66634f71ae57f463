//! Profile storage trait.

use crate::file::ProfileFile;
use anyhow::{bail, Result};
use synth_core::ProfileSet;

/// Trait for profile storage operations.
///
/// Profiles are keyed by layout name. Saving under an existing name
/// replaces the previous profile.
pub trait ProfileStore: Send + Sync {
    /// Store a profile file, replacing any file with the same layout name.
    fn save(&self, file: &ProfileFile) -> Result<()>;

    /// Read the profile file saved under `layout_name`.
    ///
    /// Returns None if no profile has been saved under that name.
    fn load(&self, layout_name: &str) -> Result<Option<ProfileFile>>;

    /// Store a profile set under `layout_name`.
    fn save_profile(&self, layout_name: &str, profiles: &ProfileSet) -> Result<()> {
        self.save(&ProfileFile::new(layout_name, profiles.clone()))
    }

    /// Read the profile set saved under `layout_name`.
    fn load_profile(&self, layout_name: &str) -> Result<Option<ProfileSet>> {
        Ok(self.load(layout_name)?.map(|file| file.profile))
    }
}

/// Reject layout names that cannot be used as a storage key.
pub fn validate_layout_name(layout_name: &str) -> Result<()> {
    if layout_name.trim().is_empty() {
        bail!("Layout name must not be empty");
    }
    if layout_name.contains(['/', '\\']) || layout_name.contains("..") {
        bail!("Invalid layout name '{layout_name}': must not contain path separators or '..'");
    }
    Ok(())
}
