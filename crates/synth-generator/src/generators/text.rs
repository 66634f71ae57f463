//! Free-text generators.

use super::random_length;
use rand::Rng;

const TEXT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ";

/// Generate random alphanumeric text with a length in `[min_length, max_length]`.
///
/// The alphabet includes a space, and the result is trimmed, so the value
/// can come out shorter than the drawn length.
pub fn generate_random_text<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> String {
    let len = random_length(rng, min_length, max_length);
    let text: String = (0..len)
        .map(|_| TEXT_ALPHABET[rng.random_range(0..TEXT_ALPHABET.len())] as char)
        .collect();
    text.trim().to_string()
}
