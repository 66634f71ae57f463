//! Deterministic rule-based classification.

use crate::PatternClassifier;
use synth_core::{ColumnProfile, Pattern, PatternAnnotation};

/// Columns with fewer distinct values than this are enumerations.
pub const DEFAULT_ENUM_THRESHOLD: u64 = 5;

/// Identifier width that marks a fully-unique column as a sequence.
const SEQUENCE_WIDTH: usize = 8;

/// Fallback classifier used when no classification service is available.
///
/// - `SEQUENCE`: every value distinct and every value exactly 8 characters
/// - `ENUM`: fewer than `enum_threshold` distinct values
/// - `UNCLASSIFIED`: everything else
///
/// Never emits generation guidelines.
#[derive(Debug, Clone)]
pub struct RuleBasedClassifier {
    enum_threshold: u64,
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self {
            enum_threshold: DEFAULT_ENUM_THRESHOLD,
        }
    }
}

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the distinct-value threshold for `ENUM`.
    pub fn with_enum_threshold(mut self, enum_threshold: u64) -> Self {
        self.enum_threshold = enum_threshold;
        self
    }
}

impl PatternClassifier for RuleBasedClassifier {
    fn classify(&self, column_name: &str, profile: &ColumnProfile) -> PatternAnnotation {
        if profile.unique_count == profile.total_count
            && profile.min_length == SEQUENCE_WIDTH
            && profile.max_length == SEQUENCE_WIDTH
        {
            return PatternAnnotation::new(
                column_name,
                Pattern::Sequence,
                "Every value is distinct with a fixed identifier width.",
            );
        }

        if profile.unique_count < self.enum_threshold && !profile.value_counts.is_empty() {
            return PatternAnnotation::new(
                column_name,
                Pattern::Enum,
                "Few distinct values repeat across records.",
            );
        }

        PatternAnnotation::new(
            column_name,
            Pattern::Unclassified,
            "No rule matched the column profile.",
        )
    }
}
