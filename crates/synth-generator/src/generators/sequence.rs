//! Sequence value generators.

/// Advance the counter and format it zero-padded to `width`.
///
/// The first value produced from a fresh counter is `1`. Values wider than
/// `width` are emitted in full.
pub fn next_sequence_value(counter: &mut u64, width: usize) -> String {
    *counter = counter.wrapping_add(1);
    format!("{:0width$}", *counter, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_padding() {
        let mut counter = 0;
        let values: Vec<String> = (0..12)
            .map(|_| next_sequence_value(&mut counter, 4))
            .collect();

        assert_eq!(values.first().map(String::as_str), Some("0001"));
        assert_eq!(values.last().map(String::as_str), Some("0012"));
        assert_eq!(counter, 12);
    }

    #[test]
    fn test_sequence_overflows_width() {
        let mut counter = 99;
        assert_eq!(next_sequence_value(&mut counter, 2), "100");
    }

    #[test]
    fn test_zero_width() {
        let mut counter = 0;
        assert_eq!(next_sequence_value(&mut counter, 0), "1");
    }
}
