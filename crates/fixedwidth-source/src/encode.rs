//! Fixed-width record encoding.

use synth_core::{Layout, Record};

/// Render a record as one fixed-width line.
///
/// Values are left-justified and space-padded to their field width; longer
/// values are truncated. Fields missing from the record are blank.
pub fn encode_record(record: &Record, layout: &Layout) -> String {
    let mut line = String::with_capacity(layout.record_length());
    for field in &layout.fields {
        let value = record.get(&field.name).unwrap_or("");
        let mut written = 0;
        for c in value.chars().take(field.width) {
            line.push(c);
            written += 1;
        }
        line.push_str(&" ".repeat(field.width - written));
    }
    line
}

/// Render records as newline-terminated fixed-width lines.
pub fn encode_records<'a, I>(records: I, layout: &Layout) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record, layout));
        out.push('\n');
    }
    out
}
