//! Column profiles and the ordered, annotated profile set.

use crate::error::ModelError;
use crate::pattern::{Pattern, PatternAnnotation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated statistics for one column across all decoded records.
///
/// Invariants: `unique_count == value_counts.len()` and the counts in
/// `value_counts` sum to `total_count`. `cardinality` is
/// `unique_count / total_count`, or `0.0` when `total_count == 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Number of records contributing a value
    pub total_count: u64,

    /// Number of distinct values
    pub unique_count: u64,

    /// Ratio of distinct values to total values
    pub cardinality: f64,

    /// Occurrence count per distinct value
    #[serde(default)]
    pub value_counts: BTreeMap<String, u64>,

    /// Shortest trimmed value, in characters
    pub min_length: usize,

    /// Longest trimmed value, in characters
    pub max_length: usize,
}

impl ColumnProfile {
    /// Distinct observed values.
    pub fn distinct_values(&self) -> Vec<&str> {
        self.value_counts.keys().map(String::as_str).collect()
    }
}

/// A column profile together with its (optional) classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedColumn {
    pub column_name: String,

    #[serde(flatten)]
    pub profile: ColumnProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<PatternAnnotation>,
}

impl AnnotatedColumn {
    /// Create an unclassified column entry.
    pub fn new(column_name: impl Into<String>, profile: ColumnProfile) -> Self {
        Self {
            column_name: column_name.into(),
            profile,
            annotation: None,
        }
    }

    /// Attach a classification.
    pub fn with_annotation(mut self, annotation: PatternAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// The column's pattern, if it has been classified.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.annotation.as_ref().map(|a| &a.pattern)
    }
}

/// Ordered profiles for every column of a layout.
///
/// Column order is the order in which columns were first observed and is
/// the order the generator emits fields in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSet {
    pub columns: Vec<AnnotatedColumn>,
}

impl ProfileSet {
    /// Create a profile set from ordered column entries.
    pub fn new(columns: Vec<AnnotatedColumn>) -> Self {
        Self { columns }
    }

    /// Parse a profile set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the profile set as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&AnnotatedColumn> {
        self.columns.iter().find(|c| c.column_name == name)
    }

    /// Get all column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column_name.as_str()).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over columns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedColumn> {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for &'a ProfileSet {
    type Item = &'a AnnotatedColumn;
    type IntoIter = std::slice::Iter<'a, AnnotatedColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
