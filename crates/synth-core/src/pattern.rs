//! Column pattern classifications and their generation guidelines.
//!
//! The wire shape of a classification is fixed: the tag lives in a
//! `pattern` field and any guidelines in a sibling `generation_guidelines`
//! field, e.g.
//!
//! ```json
//! {
//!     "column_name": "price",
//!     "pattern": "NUMBER",
//!     "reasoning": "Decimal amounts with two fractional digits.",
//!     "generation_guidelines": {
//!         "number_type": "DECIMAL",
//!         "min_value": 100.0,
//!         "max_value": 2500.5,
//!         "decimal_places": 2
//!     }
//! }
//! ```
//!
//! Only `NUMBER` and `DATE` carry guidelines; every other variant is a bare tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pattern {
    /// Monotonic identifiers, regenerated from a counter
    Sequence,

    /// A small set of repeated choices
    Enum,

    /// Random strings without structure
    RandomString,

    /// Calendar dates
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        generation_guidelines: Option<DateGuidelines>,
    },

    /// Numeric values
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        generation_guidelines: Option<NumberGuidelines>,
    },

    /// Boolean flags
    Boolean,

    /// Free text
    UnstructuredText,

    /// No recognizable pattern
    Unclassified,
}

impl Pattern {
    /// The wire tag for this pattern.
    pub fn tag(&self) -> &'static str {
        match self {
            Pattern::Sequence => "SEQUENCE",
            Pattern::Enum => "ENUM",
            Pattern::RandomString => "RANDOM_STRING",
            Pattern::Date { .. } => "DATE",
            Pattern::Number { .. } => "NUMBER",
            Pattern::Boolean => "BOOLEAN",
            Pattern::UnstructuredText => "UNSTRUCTURED_TEXT",
            Pattern::Unclassified => "UNCLASSIFIED",
        }
    }

    /// Whether this pattern carries generation guidelines.
    pub fn has_guidelines(&self) -> bool {
        matches!(
            self,
            Pattern::Date {
                generation_guidelines: Some(_)
            } | Pattern::Number {
                generation_guidelines: Some(_)
            }
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How a `NUMBER` column renders its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    /// Fixed number of fractional digits
    Decimal,
    /// Plain integer
    Integer,
    /// Integer zero-padded to the column's maximum length
    StringOfDigits,
}

/// Generation guidelines for `NUMBER` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberGuidelines {
    pub number_type: NumberType,
    pub min_value: f64,
    pub max_value: f64,

    /// Required for `DECIMAL`; ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
}

/// Generation guidelines for `DATE` columns.
///
/// `min_date` and `max_date` are formatted with `date_format`, a strftime
/// template such as `%m%d%Y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateGuidelines {
    pub date_format: String,
    pub min_date: String,
    pub max_date: String,
}

/// The classifier's verdict for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnnotation {
    #[serde(default)]
    pub column_name: String,

    #[serde(flatten)]
    pub pattern: Pattern,

    #[serde(default)]
    pub reasoning: String,
}

impl PatternAnnotation {
    /// Reasoning attached to annotations produced by a failed classification.
    pub const CLASSIFICATION_FAILED: &'static str = "classification failed";

    /// Create a new annotation.
    pub fn new(column_name: impl Into<String>, pattern: Pattern, reasoning: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            pattern,
            reasoning: reasoning.into(),
        }
    }

    /// The degraded annotation used whenever classification fails.
    pub fn classification_failed(column_name: impl Into<String>) -> Self {
        Self::new(
            column_name,
            Pattern::Unclassified,
            Self::CLASSIFICATION_FAILED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_annotation() {
        let json = r#"{
            "column_name": "price",
            "pattern": "NUMBER",
            "reasoning": "amounts",
            "generation_guidelines": {
                "number_type": "DECIMAL",
                "min_value": 100,
                "max_value": 200.5,
                "decimal_places": 2
            }
        }"#;

        let annotation: PatternAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(annotation.column_name, "price");
        assert_eq!(annotation.reasoning, "amounts");

        if let Pattern::Number {
            generation_guidelines: Some(guidelines),
        } = annotation.pattern
        {
            assert_eq!(guidelines.number_type, NumberType::Decimal);
            assert_eq!(guidelines.min_value, 100.0);
            assert_eq!(guidelines.max_value, 200.5);
            assert_eq!(guidelines.decimal_places, Some(2));
        } else {
            panic!("Expected NUMBER with guidelines, got {:?}", annotation.pattern);
        }
    }

    #[test]
    fn test_parse_date_annotation() {
        let json = r#"{
            "column_name": "order_date",
            "pattern": "DATE",
            "reasoning": "dates",
            "generation_guidelines": {
                "date_format": "%m%d%Y",
                "min_date": "01012023",
                "max_date": "12312023"
            }
        }"#;

        let annotation: PatternAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(
            annotation.pattern,
            Pattern::Date {
                generation_guidelines: Some(DateGuidelines {
                    date_format: "%m%d%Y".to_string(),
                    min_date: "01012023".to_string(),
                    max_date: "12312023".to_string(),
                })
            }
        );
    }

    #[test]
    fn test_unit_pattern_ignores_extra_fields() {
        let json = r#"{"column_name": "status", "pattern": "ENUM", "reasoning": "few values", "confidence": 0.9}"#;

        let annotation: PatternAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(annotation.pattern, Pattern::Enum);
    }

    #[test]
    fn test_number_without_guidelines() {
        let json = r#"{"column_name": "qty", "pattern": "NUMBER", "reasoning": ""}"#;

        let annotation: PatternAnnotation = serde_json::from_str(json).unwrap();
        assert_eq!(
            annotation.pattern,
            Pattern::Number {
                generation_guidelines: None
            }
        );
        assert!(!annotation.pattern.has_guidelines());
    }

    #[test]
    fn test_unknown_pattern_is_rejected() {
        let json = r#"{"column_name": "x", "pattern": "EMAIL", "reasoning": ""}"#;
        assert!(serde_json::from_str::<PatternAnnotation>(json).is_err());
    }

    #[test]
    fn test_serialize_uses_flat_wire_shape() {
        let annotation = PatternAnnotation::new("id", Pattern::Sequence, "unique ids");

        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(value["pattern"], "SEQUENCE");
        assert_eq!(value["column_name"], "id");
        assert!(value.get("generation_guidelines").is_none());
    }

    #[test]
    fn test_classification_failed() {
        let annotation = PatternAnnotation::classification_failed("code");

        assert_eq!(annotation.column_name, "code");
        assert_eq!(annotation.pattern, Pattern::Unclassified);
        assert_eq!(annotation.reasoning, "classification failed");
    }

    #[test]
    fn test_tags() {
        assert_eq!(Pattern::RandomString.to_string(), "RANDOM_STRING");
        assert_eq!(Pattern::UnstructuredText.tag(), "UNSTRUCTURED_TEXT");
        assert_eq!(
            Pattern::Date {
                generation_guidelines: None
            }
            .tag(),
            "DATE"
        );
    }
}
