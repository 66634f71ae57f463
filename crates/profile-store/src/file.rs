//! Profile file wrapper for storage-agnostic serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use synth_core::{Layout, ProfileSet};

/// A saved profile set together with the metadata it was saved under.
///
/// # File Format
///
/// ```json
/// {
///     "layout_name": "orders",
///     "layout": { "fields": [{ "name": "order_id", "width": 8 }] },
///     "profile": { "columns": [ ... ] },
///     "saved_at": "2024-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFile {
    /// Name of the layout the profile was learned from
    pub layout_name: String,
    /// Layout used to decode the data, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Annotated column profiles
    pub profile: ProfileSet,
    /// Timestamp when this file was written
    pub saved_at: DateTime<Utc>,
}

impl ProfileFile {
    /// Wrap a profile set for storage.
    pub fn new(layout_name: impl Into<String>, profile: ProfileSet) -> Self {
        Self {
            layout_name: layout_name.into(),
            layout: None,
            profile,
            saved_at: Utc::now(),
        }
    }

    /// Record the layout alongside the profile.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Parse a profile file from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
