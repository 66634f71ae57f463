//! Core types for the fixedwidth-synth framework.
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline:
//!
//! - [`Layout`] - Ordered field name/width pairs describing a fixed-width line
//! - [`Record`] - Ordered field name to value mapping (decoded or synthetic)
//! - [`ColumnProfile`] - Per-column statistics computed from decoded records
//! - [`Pattern`] - Closed set of column classifications with typed guidelines
//! - [`ProfileSet`] - Ordered, pattern-annotated profiles for a whole layout
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── fixedwidth-source   (layout + record decoding)
//!    ├─── column-profiler     (builds ColumnProfile values)
//!    ├─── pattern-classifier  (attaches PatternAnnotation)
//!    ├─── synth-generator     (reads ProfileSet, emits Records)
//!    └─── profile-store       (persists ProfileSet)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{Layout, LayoutField};
//!
//! let layout = Layout::new(vec![
//!     LayoutField::new("id", 8),
//!     LayoutField::new("code", 4),
//! ]);
//! assert_eq!(layout.record_length(), 12);
//! ```

pub mod error;
pub mod layout;
pub mod pattern;
pub mod profile;
pub mod record;

// Re-exports for convenience
pub use error::ModelError;
pub use layout::{Layout, LayoutField};
pub use pattern::{DateGuidelines, NumberGuidelines, NumberType, Pattern, PatternAnnotation};
pub use profile::{AnnotatedColumn, ColumnProfile, ProfileSet};
pub use record::{DecodedRecord, Record, SyntheticRecord};
