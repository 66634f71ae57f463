//! Request/response contract for pattern classification services.
//!
//! Request:
//!
//! ```json
//! { "column_name": "status", "column_profile": { "total_count": 5, ... } }
//! ```
//!
//! Response: `{column_name, pattern, reasoning}` plus `generation_guidelines`
//! for `NUMBER` and `DATE`. Downstream generation matches on the exact
//! field names `pattern` and `generation_guidelines`.

use serde::Serialize;
use synth_core::{ColumnProfile, PatternAnnotation};
use tracing::warn;

/// The structured request sent to a classification service.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRequest<'a> {
    pub column_name: &'a str,
    pub column_profile: &'a ColumnProfile,
}

impl<'a> ClassificationRequest<'a> {
    pub fn new(column_name: &'a str, column_profile: &'a ColumnProfile) -> Self {
        Self {
            column_name,
            column_profile,
        }
    }
}

/// Slice out the outermost `{ ... }` of a model reply.
///
/// Replies often wrap the object in prose or a fenced code block.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

/// Parse a service reply into an annotation for `column_name`.
///
/// Anything that does not parse as the contract shape degrades to
/// `UNCLASSIFIED` with reasoning `"classification failed"`. A reply that
/// omits `column_name` is attributed to the requested column.
pub fn parse_classification_response(column_name: &str, raw: &str) -> PatternAnnotation {
    let Some(json) = extract_json_object(raw) else {
        warn!("Classifier reply for '{column_name}' contains no JSON object");
        return PatternAnnotation::classification_failed(column_name);
    };

    match serde_json::from_str::<PatternAnnotation>(json) {
        Ok(mut annotation) => {
            if annotation.column_name.is_empty() {
                annotation.column_name = column_name.to_string();
            }
            annotation
        }
        Err(e) => {
            warn!("Failed to parse classifier reply for '{column_name}': {e}");
            PatternAnnotation::classification_failed(column_name)
        }
    }
}
