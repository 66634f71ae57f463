//! Fixed-width layout and record decoding.
//!
//! This crate turns raw layout rows into a [`Layout`](synth_core::Layout)
//! and slices fixed-width text into [`DecodedRecord`](synth_core::DecodedRecord)s.
//!
//! Only a missing layout source is fatal. Malformed layout rows and data
//! lines of the wrong length are skipped with a `warn!` diagnostic and the
//! rest of the input is still processed.
//!
//! # Example
//!
//! ```rust
//! use fixedwidth_source::{decode_layout, decode_records, LayoutRow};
//!
//! let layout = decode_layout(vec![
//!     LayoutRow::numeric("id", 8.0),
//!     LayoutRow::text("code", "X(4)"),
//! ]);
//! let records = decode_records("00000001ABCD\n", &layout);
//!
//! assert_eq!(records[0].get("id"), Some("00000001"));
//! assert_eq!(records[0].get("code"), Some("ABCD"));
//! ```

mod decode;
mod encode;
mod error;
mod layout;
mod source;

pub use decode::decode_records;
pub use encode::{encode_record, encode_records};
pub use error::LayoutError;
pub use layout::{decode_layout, parse_picture_width, LayoutRow, LengthSpec, WidthError};
pub use source::{load_layout, CsvLayoutSource, LayoutSource};
