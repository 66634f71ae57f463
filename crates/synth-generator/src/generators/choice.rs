//! Choice generators for enumerated columns.

use rand::Rng;

/// Pick one of `values` uniformly at random.
///
/// Observed frequencies are not used as weights. An empty list yields an
/// empty string.
pub fn generate_choice<R: Rng>(rng: &mut R, values: &[&str]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let idx = rng.random_range(0..values.len());
    values[idx].to_string()
}
