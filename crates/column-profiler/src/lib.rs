//! Column profiling for decoded records.
//!
//! [`profile_records`] computes, for every column seen in the input,
//! the number of values, the distinct-value frequency map, cardinality and
//! character-length bounds. Columns appear in the order they are first
//! observed. No records means no profiles: the result is an empty
//! [`ProfileSet`], never a set of zero-filled entries.

use std::collections::{BTreeMap, HashMap};
use synth_core::{AnnotatedColumn, ColumnProfile, DecodedRecord, ProfileSet};
use tracing::{debug, info};

/// Running statistics for one column.
#[derive(Debug, Default)]
struct ColumnAccumulator {
    total_count: u64,
    value_counts: BTreeMap<String, u64>,
    min_length: Option<usize>,
    max_length: usize,
}

impl ColumnAccumulator {
    fn observe(&mut self, value: &str) {
        self.total_count += 1;
        *self.value_counts.entry(value.to_string()).or_insert(0) += 1;

        let length = value.trim().chars().count();
        self.min_length = Some(self.min_length.map_or(length, |min| min.min(length)));
        self.max_length = self.max_length.max(length);
    }

    fn finish(self) -> ColumnProfile {
        let unique_count = self.value_counts.len() as u64;
        ColumnProfile {
            total_count: self.total_count,
            unique_count,
            cardinality: cardinality(unique_count, self.total_count),
            value_counts: self.value_counts,
            min_length: self.min_length.unwrap_or(0),
            max_length: self.max_length,
        }
    }
}

/// `unique / total`, or `0.0` for an empty column.
pub fn cardinality(unique_count: u64, total_count: u64) -> f64 {
    if total_count == 0 {
        0.0
    } else {
        unique_count as f64 / total_count as f64
    }
}

/// Profile every column of the given records.
pub fn profile_records(records: &[DecodedRecord]) -> ProfileSet {
    if records.is_empty() {
        info!("No records to profile");
        return ProfileSet::default();
    }

    let mut columns: Vec<(String, ColumnAccumulator)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        for (name, value) in record.iter() {
            let slot = match index.get(name) {
                Some(&slot) => slot,
                None => {
                    index.insert(name.to_string(), columns.len());
                    columns.push((name.to_string(), ColumnAccumulator::default()));
                    columns.len() - 1
                }
            };
            columns[slot].1.observe(value);
        }
    }

    let profiles: Vec<AnnotatedColumn> = columns
        .into_iter()
        .map(|(name, acc)| {
            let profile = acc.finish();
            debug!(
                "Column '{}': total={} unique={} cardinality={:.3} length={}..={}",
                name,
                profile.total_count,
                profile.unique_count,
                profile.cardinality,
                profile.min_length,
                profile.max_length
            );
            AnnotatedColumn::new(name, profile)
        })
        .collect();

    info!(
        "Profiled {} columns from {} records",
        profiles.len(),
        records.len()
    );
    ProfileSet::new(profiles)
}
