//! Fixed-width record decoding.

use synth_core::{DecodedRecord, Layout};
use tracing::{debug, info, warn};

/// Split fixed-width text into records according to `layout`.
///
/// Blank lines are ignored. A line whose character count differs from the
/// layout's record length is skipped with a diagnostic; decoding continues
/// with the next line. Each field is sliced positionally and trimmed.
pub fn decode_records(content: &str, layout: &Layout) -> Vec<DecodedRecord> {
    if layout.is_empty() {
        debug!("Layout has no fields, nothing to decode");
        return Vec::new();
    }

    let record_length = layout.record_length();
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        if chars.len() != record_length {
            warn!(
                "Skipping line {} due to incorrect length. Expected {}, got {}.",
                index + 1,
                record_length,
                chars.len()
            );
            skipped += 1;
            continue;
        }

        let mut record = DecodedRecord::with_capacity(layout.len());
        for (field, start) in layout.spans() {
            let value: String = chars[start..start + field.width].iter().collect();
            record.insert(field.name.as_str(), value.trim());
        }
        records.push(record);
    }

    info!(
        "Decoded {} records ({} lines skipped)",
        records.len(),
        skipped
    );
    records
}
