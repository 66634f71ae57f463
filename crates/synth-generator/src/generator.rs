//! Main generator for producing synthetic records.

use crate::config::GenerationConfig;
use crate::generators::ColumnPlan;
use rand::rngs::StdRng;
use rand::SeedableRng;
use synth_core::{ProfileSet, SyntheticRecord};
use tracing::debug;

/// Generator that produces synthetic records from an annotated profile set.
///
/// The generator uses a seeded random number generator so the same
/// profiles and seed always produce the same records.
pub struct SyntheticGenerator<'a> {
    /// Per-column state, in profile order
    plans: Vec<(&'a str, ColumnPlan<'a>)>,
    /// Base seed
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of records generated so far (plus the start index)
    index: u64,
}

impl<'a> SyntheticGenerator<'a> {
    /// Create a new generator for the given profiles and seed.
    pub fn new(profiles: &'a ProfileSet, seed: u64) -> Self {
        let plans = profiles
            .iter()
            .map(|column| (column.column_name.as_str(), ColumnPlan::from_column(column)))
            .collect();

        Self {
            plans,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Create a generator from loaded generation options.
    pub fn from_config(profiles: &'a ProfileSet, config: &GenerationConfig) -> Self {
        config
            .sequence_widths
            .iter()
            .fold(Self::new(profiles, config.seed), |generator, (column, width)| {
                generator.with_sequence_width(column, *width)
            })
    }

    /// Override the padding width of a `SEQUENCE` column.
    ///
    /// Has no effect on columns with any other pattern.
    pub fn with_sequence_width(mut self, column: &str, width: usize) -> Self {
        for (name, plan) in &mut self.plans {
            if *name == column {
                if let ColumnPlan::Sequence { width: w, .. } = plan {
                    *w = width;
                }
            }
        }
        self
    }

    /// Set the starting index for generation.
    ///
    /// Every `SEQUENCE` counter is set to `index`, so the next value is
    /// `index + 1`, and the RNG is re-seeded from the base seed and the index.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(index));
        for (_, plan) in &mut self.plans {
            if let ColumnPlan::Sequence { counter, .. } = plan {
                *counter = index;
            }
        }
        self
    }

    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> SyntheticRecord {
        let mut record = SyntheticRecord::with_capacity(self.plans.len());
        for (name, plan) in &mut self.plans {
            record.insert(*name, plan.generate(&mut self.rng));
        }
        self.index += 1;
        record
    }

    /// Lazily generate `volume` records.
    pub fn records(&mut self, volume: u64) -> SyntheticRecordIterator<'_, 'a> {
        SyntheticRecordIterator {
            generator: self,
            remaining: volume,
        }
    }

    /// Generate `volume` records.
    pub fn generate(&mut self, volume: u64) -> Vec<SyntheticRecord> {
        debug!(
            volume,
            columns = self.plans.len(),
            start = self.index,
            "Generating synthetic records"
        );
        self.records(volume).collect()
    }
}

/// Iterator that lazily generates synthetic records.
pub struct SyntheticRecordIterator<'g, 'a> {
    generator: &'g mut SyntheticGenerator<'a>,
    remaining: u64,
}

impl Iterator for SyntheticRecordIterator<'_, '_> {
    type Item = SyntheticRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SyntheticRecordIterator<'_, '_> {}

/// Generate `volume` records from `profiles` with the given seed.
///
/// A volume of zero yields no records; an empty profile set yields
/// `volume` empty records.
pub fn generate_synthetic_records(
    profiles: &ProfileSet,
    volume: u64,
    seed: u64,
) -> Vec<SyntheticRecord> {
    SyntheticGenerator::new(profiles, seed).generate(volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::date::DATE_FALLBACK;
    use std::collections::BTreeMap;
    use synth_core::{
        AnnotatedColumn, ColumnProfile, DateGuidelines, NumberGuidelines, NumberType, Pattern,
        PatternAnnotation,
    };

    fn profile(values: &[(&str, u64)]) -> ColumnProfile {
        let value_counts: BTreeMap<String, u64> =
            values.iter().map(|(v, c)| (v.to_string(), *c)).collect();
        let total_count: u64 = value_counts.values().sum();
        let lengths: Vec<usize> = value_counts.keys().map(|v| v.chars().count()).collect();
        ColumnProfile {
            total_count,
            unique_count: value_counts.len() as u64,
            cardinality: if total_count == 0 {
                0.0
            } else {
                value_counts.len() as f64 / total_count as f64
            },
            min_length: lengths.iter().copied().min().unwrap_or(0),
            max_length: lengths.iter().copied().max().unwrap_or(0),
            value_counts,
        }
    }

    fn annotated(name: &str, profile: ColumnProfile, pattern: Pattern) -> AnnotatedColumn {
        AnnotatedColumn::new(name, profile).with_annotation(PatternAnnotation::new(
            name,
            pattern,
            "test",
        ))
    }

    fn orders_profiles() -> ProfileSet {
        ProfileSet::new(vec![
            annotated(
                "order_id",
                profile(&[("0001", 1), ("0002", 1), ("0003", 1)]),
                Pattern::Sequence,
            ),
            annotated(
                "product_type",
                profile(&[("FURNITURE", 2), ("APPLIANCE", 1)]),
                Pattern::Enum,
            ),
            annotated(
                "price",
                profile(&[("120.50", 1), ("180.00", 2)]),
                Pattern::Number {
                    generation_guidelines: Some(NumberGuidelines {
                        number_type: NumberType::Decimal,
                        min_value: 100.0,
                        max_value: 200.0,
                        decimal_places: Some(2),
                    }),
                },
            ),
            annotated(
                "order_date",
                profile(&[("02022023", 1), ("03152023", 2)]),
                Pattern::Date {
                    generation_guidelines: Some(DateGuidelines {
                        date_format: "%m%d%Y".to_string(),
                        min_date: "01012023".to_string(),
                        max_date: "12312023".to_string(),
                    }),
                },
            ),
            annotated(
                "notes",
                profile(&[("free text", 1), ("more", 2)]),
                Pattern::UnstructuredText,
            ),
        ])
    }

    #[test]
    fn test_record_shape_follows_profile_order() {
        let profiles = orders_profiles();
        let records = generate_synthetic_records(&profiles, 10, 42);

        assert_eq!(records.len(), 10);
        for record in &records {
            assert_eq!(
                record.field_names(),
                vec!["order_id", "product_type", "price", "order_date", "notes"]
            );
        }
    }

    #[test]
    fn test_sequence_values() {
        let profiles = ProfileSet::new(vec![annotated(
            "id",
            profile(&[("0001", 1), ("0002", 1)]),
            Pattern::Sequence,
        )]);

        let records = generate_synthetic_records(&profiles, 12, 42);
        let ids: Vec<&str> = records.iter().filter_map(|r| r.get("id")).collect();

        assert_eq!(ids.len(), 12);
        assert_eq!(ids[0], "0001");
        assert_eq!(ids[11], "0012");
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, format!("{:04}", i + 1));
        }
    }

    #[test]
    fn test_sequence_width_override() {
        let profiles = ProfileSet::new(vec![annotated(
            "id",
            profile(&[("01", 1)]),
            Pattern::Sequence,
        )]);

        let mut generator = SyntheticGenerator::new(&profiles, 42).with_sequence_width("id", 6);
        assert_eq!(generator.next_record().get("id"), Some("000001"));
    }

    #[test]
    fn test_from_config() {
        let profiles = ProfileSet::new(vec![annotated(
            "id",
            profile(&[("01", 1)]),
            Pattern::Sequence,
        )]);
        let config = GenerationConfig::from_yaml("seed: 3\nsequence_widths:\n  id: 5\n").unwrap();

        let mut generator = SyntheticGenerator::from_config(&profiles, &config);
        assert_eq!(generator.next_record().get("id"), Some("00001"));
    }

    #[test]
    fn test_enum_ignores_frequencies() {
        let profiles = ProfileSet::new(vec![annotated(
            "flag",
            profile(&[("A", 1000), ("B", 1)]),
            Pattern::Enum,
        )]);

        let records = generate_synthetic_records(&profiles, 10_000, 42);
        let a_count = records.iter().filter(|r| r.get("flag") == Some("A")).count();
        let b_count = records.iter().filter(|r| r.get("flag") == Some("B")).count();

        assert_eq!(a_count + b_count, 10_000);
        assert!((4500..=5500).contains(&a_count), "A drawn {a_count} times");
        assert!((4500..=5500).contains(&b_count), "B drawn {b_count} times");
    }

    #[test]
    fn test_guided_values_stay_in_bounds() {
        let profiles = orders_profiles();
        let records = generate_synthetic_records(&profiles, 200, 7);

        for record in &records {
            let product = record.get("product_type").unwrap();
            assert!(product == "FURNITURE" || product == "APPLIANCE");

            let price = record.get("price").unwrap();
            let (_, frac) = price.split_once('.').unwrap();
            assert_eq!(frac.len(), 2);
            let price: f64 = price.parse().unwrap();
            assert!((100.0..=200.0).contains(&price));

            let date = record.get("order_date").unwrap();
            assert_eq!(date.len(), 8);
            assert!(date.ends_with("2023"), "unexpected date {date}");

            let notes = record.get("notes").unwrap();
            assert!(notes.chars().count() <= 9);
        }
    }

    #[test]
    fn test_unparseable_date_bounds() {
        let profiles = ProfileSet::new(vec![annotated(
            "d",
            profile(&[("x", 1)]),
            Pattern::Date {
                generation_guidelines: Some(DateGuidelines {
                    date_format: "%m%d%Y".to_string(),
                    min_date: "13452023".to_string(),
                    max_date: "12312023".to_string(),
                }),
            },
        )]);

        let records = generate_synthetic_records(&profiles, 25, 42);
        assert!(records.iter().all(|r| r.get("d") == Some(DATE_FALLBACK)));
    }

    #[test]
    fn test_unguided_number_uses_observed_lengths() {
        let profiles = ProfileSet::new(vec![annotated(
            "qty",
            profile(&[("7", 1), ("12345", 1)]),
            Pattern::Number {
                generation_guidelines: None,
            },
        )]);

        for record in generate_synthetic_records(&profiles, 100, 42) {
            let qty = record.get("qty").unwrap();
            assert!((1..=5).contains(&qty.len()));
            assert!(qty.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_unclassified_columns_still_generate() {
        let profiles = ProfileSet::new(vec![AnnotatedColumn::new(
            "raw",
            profile(&[("abc", 1), ("defgh", 1)]),
        )]);

        let records = generate_synthetic_records(&profiles, 50, 42);
        assert!(records
            .iter()
            .all(|r| r.get("raw").is_some_and(|v| v.chars().count() <= 5)));
    }

    #[test]
    fn test_deterministic_generation() {
        let profiles = orders_profiles();

        let first = generate_synthetic_records(&profiles, 50, 42);
        let second = generate_synthetic_records(&profiles, 50, 42);
        let other = generate_synthetic_records(&profiles, 50, 43);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_start_index() {
        let profiles = orders_profiles();

        let mut generator = SyntheticGenerator::new(&profiles, 42).with_start_index(100);
        assert_eq!(generator.current_index(), 100);

        let record = generator.next_record();
        assert_eq!(record.get("order_id"), Some("0101"));
        assert_eq!(generator.current_index(), 101);

        let mut again = SyntheticGenerator::new(&profiles, 42).with_start_index(100);
        assert_eq!(again.next_record(), record);
    }

    #[test]
    fn test_iterator_is_exact_size() {
        let profiles = orders_profiles();
        let mut generator = SyntheticGenerator::new(&profiles, 42);

        let iter = generator.records(5);
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.count(), 5);
        assert_eq!(generator.current_index(), 5);
    }

    #[test]
    fn test_edge_volumes() {
        let profiles = orders_profiles();
        assert!(generate_synthetic_records(&profiles, 0, 42).is_empty());

        let empty = ProfileSet::default();
        let records = generate_synthetic_records(&empty, 3, 42);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.is_empty()));
    }
}
