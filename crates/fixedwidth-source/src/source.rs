//! Layout sources.
//!
//! A layout source supplies raw `(name, length)` rows. Callers pass the
//! source explicitly; there is no process-wide reader.

use crate::error::LayoutError;
use crate::layout::{decode_layout, LayoutRow, LengthSpec};
use std::path::{Path, PathBuf};
use synth_core::Layout;
use tracing::info;

/// Supplies raw layout rows, header row already removed.
pub trait LayoutSource {
    /// Read all data rows.
    fn rows(&self) -> Result<Vec<LayoutRow>, LayoutError>;
}

impl LayoutSource for Vec<LayoutRow> {
    fn rows(&self) -> Result<Vec<LayoutRow>, LayoutError> {
        Ok(self.clone())
    }
}

/// Layout sheet exported as CSV.
///
/// Column 1 holds the field name and column 2 the length specifier. Row 1
/// is a header and is skipped.
#[derive(Debug, Clone)]
pub struct CsvLayoutSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvLayoutSource {
    /// Create a source reading the given CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Set the field delimiter (default: `,`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Interpret a length cell: numbers are numeric widths, anything else is text.
fn length_cell(cell: &str) -> Option<LengthSpec> {
    if cell.is_empty() {
        return None;
    }
    match cell.parse::<f64>() {
        Ok(value) => Some(LengthSpec::Number(value)),
        Err(_) => Some(LengthSpec::Text(cell.to_string())),
    }
}

impl LayoutSource for CsvLayoutSource {
    fn rows(&self) -> Result<Vec<LayoutRow>, LayoutError> {
        if !self.path.exists() {
            return Err(LayoutError::SourceNotFound(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let name = record
                .get(0)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string);
            let length = record.get(1).and_then(length_cell);
            rows.push(LayoutRow::new(name, length));
        }

        info!(
            "Read {} layout rows from {}",
            rows.len(),
            self.path.display()
        );
        Ok(rows)
    }
}

/// Read and decode a layout from a source.
///
/// Only source-level failures are returned; bad rows are skipped.
pub fn load_layout(source: &dyn LayoutSource) -> Result<Layout, LayoutError> {
    let rows = source.rows()?;
    let row_count = rows.len();
    let layout = decode_layout(rows);
    info!(
        "Decoded layout: {} of {} rows usable, record length {}",
        layout.len(),
        row_count,
        layout.record_length()
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use synth_core::LayoutField;

    fn write_layout(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_csv_layout_source_skips_header() {
        let file = write_layout(
            "Field Name,Field Length\n\
             id,9(8)\n\
             product_code,X(10)\n\
             price,7\n\
             ratio,4.5\n",
        );

        let layout = load_layout(&CsvLayoutSource::new(file.path())).unwrap();
        assert_eq!(
            layout.fields,
            vec![
                LayoutField::new("id", 8),
                LayoutField::new("product_code", 10),
                LayoutField::new("price", 7),
                LayoutField::new("ratio", 4),
            ]
        );
    }

    #[test]
    fn test_csv_layout_source_ragged_and_empty_cells() {
        let file = write_layout(
            "name;length\n\
             ;5\n\
             only_name\n\
             status; X(2) \n",
        );

        let source = CsvLayoutSource::new(file.path()).with_delimiter(b';');
        let rows = source.rows().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, None);
        assert_eq!(rows[1].length, None);
        assert_eq!(rows[2].length, Some(LengthSpec::Text("X(2)".to_string())));

        let layout = load_layout(&source).unwrap();
        assert_eq!(layout.fields, vec![LayoutField::new("status", 2)]);
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let result = load_layout(&CsvLayoutSource::new(&missing));
        assert!(matches!(result, Err(LayoutError::SourceNotFound(path)) if path == missing));
    }

    #[test]
    fn test_in_memory_rows() {
        let rows = vec![LayoutRow::numeric("id", 8.0), LayoutRow::text("code", "X(4)")];

        let layout = load_layout(&rows).unwrap();
        assert_eq!(layout.record_length(), 12);
    }
}
