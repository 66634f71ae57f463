//! In-process profile storage.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::file::ProfileFile;
use crate::store::{validate_layout_name, ProfileStore};

/// Keeps serialized profile files in memory, keyed by layout name.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.blobs.lock().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryStore {
    fn save(&self, file: &ProfileFile) -> Result<()> {
        validate_layout_name(&file.layout_name)?;
        let blob = serde_json::to_string(file)?;
        self.blobs
            .lock()
            .map_err(|_| anyhow!("profile store lock poisoned"))?
            .insert(file.layout_name.clone(), blob);
        Ok(())
    }

    fn load(&self, layout_name: &str) -> Result<Option<ProfileFile>> {
        validate_layout_name(layout_name)?;
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        blobs
            .get(layout_name)
            .map(String::as_str)
            .map(ProfileFile::from_json)
            .transpose()
    }
}
