//! Date value generators.

use chrono::{Days, NaiveDate};
use rand::Rng;
use std::fmt::Write;
use synth_core::DateGuidelines;
use tracing::debug;

/// Emitted when a bound cannot be parsed or a date cannot be rendered.
pub const DATE_FALLBACK: &str = "00000000";

const UNGUIDED_YEARS: std::ops::RangeInclusive<u32> = 2000..=2025;
const UNGUIDED_MONTHS: std::ops::RangeInclusive<u32> = 1..=12;
const UNGUIDED_DAYS: std::ops::RangeInclusive<u32> = 1..=28;

/// Generate a date uniformly within the guideline bounds (inclusive).
///
/// Both bounds are parsed with `date_format` and the result is rendered with
/// it. If `max_date` is not after `min_date`, `min_date` is returned.
pub fn generate_date_in_range<R: Rng>(rng: &mut R, guidelines: &DateGuidelines) -> String {
    let format = guidelines.date_format.as_str();
    let (min, max) = match (
        NaiveDate::parse_from_str(&guidelines.min_date, format),
        NaiveDate::parse_from_str(&guidelines.max_date, format),
    ) {
        (Ok(min), Ok(max)) => (min, max),
        (Err(e), _) | (_, Err(e)) => {
            debug!(
                "Unparseable date bounds {:?}..{:?} for format {format:?}: {e}",
                guidelines.min_date, guidelines.max_date
            );
            return DATE_FALLBACK.to_string();
        }
    };

    let date = if max <= min {
        min
    } else {
        let days = (max - min).num_days() as u64;
        let offset = rng.random_range(0..=days);
        min.checked_add_days(Days::new(offset)).unwrap_or(min)
    };

    format_date(date, format)
}

/// Generate an `MMDDYYYY` string from independently drawn year, month and day.
///
/// Days are drawn from 1..=28 and the combination is never validated
/// against the calendar.
pub fn generate_unguided_date<R: Rng>(rng: &mut R) -> String {
    let year = rng.random_range(UNGUIDED_YEARS);
    let month = rng.random_range(UNGUIDED_MONTHS);
    let day = rng.random_range(UNGUIDED_DAYS);
    format!("{month:02}{day:02}{year}")
}

fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return DATE_FALLBACK.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn guidelines(format: &str, min: &str, max: &str) -> DateGuidelines {
        DateGuidelines {
            date_format: format.to_string(),
            min_date: min.to_string(),
            max_date: max.to_string(),
        }
    }

    #[test]
    fn test_date_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = guidelines("%m%d%Y", "01012023", "12312023");
        let min = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let max = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

        for _ in 0..500 {
            let value = generate_date_in_range(&mut rng, &g);
            assert_eq!(value.len(), 8);
            let parsed = NaiveDate::parse_from_str(&value, "%m%d%Y").unwrap();
            assert!(parsed >= min && parsed <= max, "out of range: {value}");
        }
    }

    #[test]
    fn test_bounds_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = guidelines("%Y-%m-%d", "2024-02-28", "2024-03-01");

        let values: std::collections::HashSet<String> =
            (0..200).map(|_| generate_date_in_range(&mut rng, &g)).collect();

        assert!(values.contains("2024-02-28"));
        assert!(values.contains("2024-02-29"));
        assert!(values.contains("2024-03-01"));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_unparseable_bound_yields_fallback() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = guidelines("%m%d%Y", "01012023", "not a date");

        for _ in 0..20 {
            assert_eq!(generate_date_in_range(&mut rng, &g), DATE_FALLBACK);
        }
    }

    #[test]
    fn test_reversed_range_emits_lower_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = guidelines("%m%d%Y", "06302023", "01012023");

        assert_eq!(generate_date_in_range(&mut rng, &g), "06302023");
    }

    #[test]
    fn test_unguided_date_shape() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let value = generate_unguided_date(&mut rng);
            assert_eq!(value.len(), 8);
            assert!(value.chars().all(|c| c.is_ascii_digit()));

            let month: u32 = value[0..2].parse().unwrap();
            let day: u32 = value[2..4].parse().unwrap();
            let year: u32 = value[4..8].parse().unwrap();
            assert!((1..=12).contains(&month));
            assert!((1..=28).contains(&day));
            assert!((2000..=2025).contains(&year));
            // No calendar validation is asserted here.
        }
    }
}
