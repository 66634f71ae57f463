//! Individual value generators for each column pattern.
//!
//! A [`ColumnPlan`] is built once per column before generation starts. It
//! holds whatever state the pattern needs for the whole run: the counter
//! of a `SEQUENCE` column, the distinct values of an `ENUM` column, and
//! borrowed guidelines for `NUMBER`/`DATE`.

pub mod choice;
pub mod date;
pub mod numeric;
pub mod sequence;
pub mod text;

use rand::Rng;
use synth_core::{AnnotatedColumn, DateGuidelines, NumberGuidelines, Pattern};

/// Per-column generation state.
#[derive(Debug, Clone)]
pub enum ColumnPlan<'a> {
    Sequence { counter: u64, width: usize },
    Enum { values: Vec<&'a str> },
    Number {
        guidelines: Option<&'a NumberGuidelines>,
        min_length: usize,
        max_length: usize,
    },
    Date { guidelines: Option<&'a DateGuidelines> },
    Text { min_length: usize, max_length: usize },
}

impl<'a> ColumnPlan<'a> {
    /// Build the plan for a column from its pattern and profile.
    pub fn from_column(column: &'a AnnotatedColumn) -> Self {
        let profile = &column.profile;
        match column.pattern() {
            Some(Pattern::Sequence) => ColumnPlan::Sequence {
                counter: 0,
                width: profile.max_length,
            },
            Some(Pattern::Enum) => ColumnPlan::Enum {
                values: profile.distinct_values(),
            },
            Some(Pattern::Number {
                generation_guidelines,
            }) => ColumnPlan::Number {
                guidelines: generation_guidelines.as_ref(),
                min_length: profile.min_length,
                max_length: profile.max_length,
            },
            Some(Pattern::Date {
                generation_guidelines,
            }) => ColumnPlan::Date {
                guidelines: generation_guidelines.as_ref(),
            },
            _ => ColumnPlan::Text {
                min_length: profile.min_length,
                max_length: profile.max_length,
            },
        }
    }

    /// Generate the next value for this column.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> String {
        match self {
            ColumnPlan::Sequence { counter, width } => sequence::next_sequence_value(counter, *width),

            ColumnPlan::Enum { values } => choice::generate_choice(rng, values),

            ColumnPlan::Number {
                guidelines: Some(guidelines),
                min_length,
                max_length,
            } => numeric::generate_number(rng, guidelines, *min_length, *max_length),

            ColumnPlan::Number {
                guidelines: None,
                min_length,
                max_length,
            } => numeric::generate_digit_string(rng, *min_length, *max_length),

            ColumnPlan::Date {
                guidelines: Some(guidelines),
            } => date::generate_date_in_range(rng, guidelines),

            ColumnPlan::Date { guidelines: None } => date::generate_unguided_date(rng),

            ColumnPlan::Text {
                min_length,
                max_length,
            } => text::generate_random_text(rng, *min_length, *max_length),
        }
    }
}

/// Draw a length uniformly from `[min_length, max_length]`.
///
/// A reversed range collapses to `min_length`.
pub(crate) fn random_length<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> usize {
    rng.random_range(min_length..=max_length.max(min_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use synth_core::{ColumnProfile, PatternAnnotation};

    fn column(pattern: Option<Pattern>) -> AnnotatedColumn {
        let profile = ColumnProfile {
            total_count: 3,
            unique_count: 2,
            cardinality: 2.0 / 3.0,
            value_counts: [("AB".to_string(), 2), ("CDE".to_string(), 1)]
                .into_iter()
                .collect(),
            min_length: 2,
            max_length: 3,
        };
        let column = AnnotatedColumn::new("c", profile);
        match pattern {
            Some(pattern) => column.with_annotation(PatternAnnotation::new("c", pattern, "")),
            None => column,
        }
    }

    #[test]
    fn test_plans_follow_patterns() {
        let sequence = column(Some(Pattern::Sequence));
        assert!(matches!(
            ColumnPlan::from_column(&sequence),
            ColumnPlan::Sequence {
                counter: 0,
                width: 3
            }
        ));

        let enumeration = column(Some(Pattern::Enum));
        if let ColumnPlan::Enum { values } = ColumnPlan::from_column(&enumeration) {
            assert_eq!(values, vec!["AB", "CDE"]);
        } else {
            panic!("Expected Enum plan");
        }

        for pattern in [
            None,
            Some(Pattern::Boolean),
            Some(Pattern::RandomString),
            Some(Pattern::UnstructuredText),
            Some(Pattern::Unclassified),
        ] {
            let c = column(pattern);
            assert!(matches!(
                ColumnPlan::from_column(&c),
                ColumnPlan::Text {
                    min_length: 2,
                    max_length: 3
                }
            ));
        }
    }

    #[test]
    fn test_random_length_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let len = random_length(&mut rng, 2, 5);
            assert!((2..=5).contains(&len));
        }
        assert_eq!(random_length(&mut rng, 4, 1), 4);
    }
}
