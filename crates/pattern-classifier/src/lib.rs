//! Column pattern classification.
//!
//! A [`PatternClassifier`] turns a column's statistical profile into a
//! [`PatternAnnotation`]. Classification never fails: implementations
//! degrade to `UNCLASSIFIED` / `"classification failed"` instead.
//!
//! ## Implementations
//!
//! - [`RuleBasedClassifier`] - Deterministic fallback used when no service is configured
//! - [`LlmClassifier`] - OpenAI-compatible chat completion endpoint
//!
//! The wire contract shared by every implementation lives in [`contract`].

pub mod contract;
mod llm;
mod rules;

pub use contract::{parse_classification_response, ClassificationRequest};
pub use llm::{ClassifierEndpoint, LlmClassifier};
pub use rules::{RuleBasedClassifier, DEFAULT_ENUM_THRESHOLD};

use synth_core::{ColumnProfile, PatternAnnotation, ProfileSet};
use tracing::info;

/// Classifies one column from its profile.
pub trait PatternClassifier {
    /// Classify a column. Must not fail; degrade instead.
    fn classify(&self, column_name: &str, profile: &ColumnProfile) -> PatternAnnotation;
}

impl<C: PatternClassifier + ?Sized> PatternClassifier for Box<C> {
    fn classify(&self, column_name: &str, profile: &ColumnProfile) -> PatternAnnotation {
        (**self).classify(column_name, profile)
    }
}

/// Classify every column, returning a new annotated set in the same order.
pub fn annotate_profiles(profiles: &ProfileSet, classifier: &dyn PatternClassifier) -> ProfileSet {
    let columns = profiles
        .iter()
        .map(|column| {
            let mut annotation = classifier.classify(&column.column_name, &column.profile);
            if annotation.column_name.is_empty() {
                annotation.column_name = column.column_name.clone();
            }
            info!(
                "Column '{}' classified as {}",
                column.column_name, annotation.pattern
            );
            column.clone().with_annotation(annotation)
        })
        .collect();
    ProfileSet::new(columns)
}
