//! Layout row decoding.
//!
//! A layout row is `(name, length_specifier)`. The specifier is either a
//! number (truncated to an integer width) or a legacy picture clause such as
//! `X(10)` or `9(8)`, whose parenthesised digit count is the width.

use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;
use synth_core::{Layout, LayoutField};
use tracing::{debug, warn};

/// Digits inside parentheses, e.g. the `8` of `9(8)`.
static PICTURE_WIDTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("Invalid picture width regex"));

/// Raw length specifier cell.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthSpec {
    /// Integer or real width
    Number(f64),
    /// Legacy notation such as `X(10)`
    Text(String),
}

/// One raw row of a layout sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub name: Option<String>,
    pub length: Option<LengthSpec>,
}

impl LayoutRow {
    /// Create a row from optional cells.
    pub fn new(name: Option<String>, length: Option<LengthSpec>) -> Self {
        Self { name, length }
    }

    /// Create a row with a numeric length.
    pub fn numeric(name: impl Into<String>, length: f64) -> Self {
        Self::new(Some(name.into()), Some(LengthSpec::Number(length)))
    }

    /// Create a row with a textual length specifier.
    pub fn text(name: impl Into<String>, length: impl Into<String>) -> Self {
        Self::new(Some(name.into()), Some(LengthSpec::Text(length.into())))
    }
}

/// Why a length specifier could not be turned into a width.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WidthError {
    #[error("no parenthesised digits in '{0}'")]
    NoMatch(String),

    #[error("invalid digits in '{spec}': {source}")]
    InvalidDigits {
        spec: String,
        source: ParseIntError,
    },

    #[error("width {0} is not a positive integer")]
    NotPositive(String),
}

/// Extract the width from a picture clause like `X(10)`.
pub fn parse_picture_width(spec: &str) -> Result<usize, WidthError> {
    let captures = PICTURE_WIDTH_REGEX
        .captures(spec)
        .ok_or_else(|| WidthError::NoMatch(spec.to_string()))?;
    let digits = &captures[1];
    let width: usize = digits.parse().map_err(|source| WidthError::InvalidDigits {
        spec: spec.to_string(),
        source,
    })?;
    if width == 0 {
        return Err(WidthError::NotPositive(digits.to_string()));
    }
    Ok(width)
}

/// Truncate a numeric width toward zero.
fn numeric_width(value: f64) -> Result<usize, WidthError> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 1.0 || truncated > usize::MAX as f64 {
        return Err(WidthError::NotPositive(value.to_string()));
    }
    Ok(truncated as usize)
}

/// Decode raw rows into a layout, skipping rows that cannot be used.
///
/// Surviving rows keep their input order.
pub fn decode_layout<I>(rows: I) -> Layout
where
    I: IntoIterator<Item = LayoutRow>,
{
    let mut fields = Vec::new();
    let mut record_length = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;

        let Some(name) = row.name else {
            warn!("Skipping layout row {row_number}: missing field name");
            continue;
        };

        let width = match &row.length {
            Some(LengthSpec::Number(value)) => numeric_width(*value),
            Some(LengthSpec::Text(spec)) => parse_picture_width(spec),
            None => {
                warn!("Skipping layout row {row_number} ('{name}'): missing length");
                continue;
            }
        };

        match width {
            Ok(width) => match record_length.checked_add(width) {
                Some(total) => {
                    debug!("Layout field '{name}' width {width}");
                    record_length = total;
                    fields.push(LayoutField::new(name, width));
                }
                None => warn!(
                    "Skipping layout row {row_number} ('{name}'): width {width} overflows the record length"
                ),
            },
            Err(e) => warn!("Skipping layout row {row_number} ('{name}'): {e}"),
        }
    }

    Layout::new(fields)
}
