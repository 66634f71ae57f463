//! Fixed-width record layouts.

use serde::{Deserialize, Serialize};

/// A single field of a fixed-width layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutField {
    /// Field name (need not be unique)
    pub name: String,

    /// Width of the field in characters, always positive
    pub width: usize,
}

impl LayoutField {
    /// Create a new layout field.
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Ordered sequence of fields describing how to slice a fixed-width line.
///
/// Slicing is purely positional: field `n` starts where field `n - 1`
/// ends, and a valid line is exactly [`Layout::record_length`] characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Fields in line order
    pub fields: Vec<LayoutField>,
}

impl Layout {
    /// Create a layout from an ordered list of fields.
    pub fn new(fields: Vec<LayoutField>) -> Self {
        Self { fields }
    }

    /// Sum of all field widths, saturating at `usize::MAX`.
    pub fn record_length(&self) -> usize {
        self.fields
            .iter()
            .fold(0usize, |total, f| total.saturating_add(f.width))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, start_offset)` pairs in line order.
    pub fn spans(&self) -> impl Iterator<Item = (&LayoutField, usize)> {
        self.fields.iter().scan(0usize, |offset, field| {
            let start = *offset;
            *offset = offset.saturating_add(field.width);
            Some((field, start))
        })
    }

    /// Get the first field with the given name.
    pub fn get_field(&self, name: &str) -> Option<&LayoutField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in line order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl FromIterator<LayoutField> for Layout {
    fn from_iter<T: IntoIterator<Item = LayoutField>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
