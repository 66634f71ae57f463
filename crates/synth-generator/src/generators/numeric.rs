//! Numeric value generators.

use super::random_length;
use rand::Rng;
use synth_core::{NumberGuidelines, NumberType};
use tracing::debug;

const DEFAULT_DECIMAL_PLACES: u32 = 2;

/// Upper bound on rendered fractional digits; an `f64` carries no more.
pub const MAX_DECIMAL_PLACES: u32 = 17;

/// Generate a value following `NUMBER` guidelines.
///
/// Reversed bounds are swapped. Bounds that are not finite fall back to a
/// random digit string sized by the column's observed lengths.
pub fn generate_number<R: Rng>(
    rng: &mut R,
    guidelines: &NumberGuidelines,
    min_length: usize,
    max_length: usize,
) -> String {
    let (min, max) = ordered_bounds(guidelines.min_value, guidelines.max_value);
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return generate_digit_string(rng, min_length, max_length);
    }

    match guidelines.number_type {
        NumberType::Decimal => {
            let requested = guidelines.decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES);
            if requested > MAX_DECIMAL_PLACES {
                debug!("Clamping decimal_places {requested} to {MAX_DECIMAL_PLACES}");
            }
            let places = requested.min(MAX_DECIMAL_PLACES) as usize;
            generate_decimal_range(rng, min, max, places)
        }
        NumberType::Integer => generate_int_range(rng, min, max).to_string(),
        NumberType::StringOfDigits => {
            let value = generate_int_range(rng, min, max);
            format!("{:0width$}", value, width = max_length)
        }
    }
}

/// Generate a decimal in `[min, max]` rendered with `places` fractional digits.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64, places: usize) -> String {
    let value = rng.random_range(min..=max);
    let rendered = format!("{value:.places$}");
    // Rounding may step just past a bound; re-render the bound itself.
    match rendered.parse::<f64>() {
        Ok(v) if v > max => format!("{max:.places$}"),
        Ok(v) if v < min => format!("{min:.places$}"),
        _ => rendered,
    }
}

/// Generate an integer in `[ceil(min), floor(max)]`.
///
/// When no integer lies in the range, `round(min)` is returned.
pub fn generate_int_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> i64 {
    let low = min.ceil() as i64;
    let high = max.floor() as i64;
    if low > high {
        return min.round() as i64;
    }
    rng.random_range(low..=high)
}

/// Generate a string of random digits with a length in `[min_length, max_length]`.
pub fn generate_digit_string<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> String {
    let len = random_length(rng, min_length, max_length);
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn ordered_bounds(a: f64, b: f64) -> (f64, f64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
