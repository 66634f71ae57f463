//! Synthetic record generator for fixedwidth-synth.
//!
//! This crate provides the [`SyntheticGenerator`], which produces records
//! that follow the patterns learned for each column of a [`ProfileSet`].
//! A seeded RNG makes generation reproducible across runs with the same
//! profile and seed.
//!
//! # Architecture
//!
//! ```text
//! ProfileSet (annotated)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  SyntheticGenerator  │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - column plans      │  sequence counters, enum value lists
//! │  - index             │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   SyntheticRecord { column -> value }
//! ```
//!
//! # Patterns
//!
//! - `SEQUENCE` - counter starting at 1, zero-padded to the column width
//! - `ENUM` - uniform choice over distinct observed values
//! - `NUMBER` - bounded decimal/integer/digit-string, or random digits
//! - `DATE` - uniform day within bounds, or an unvalidated month/day/year
//! - anything else - random alphanumeric text within the observed lengths
//!
//! [`ProfileSet`]: synth_core::ProfileSet

pub mod config;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use config::{ConfigError, GenerationConfig};
pub use generator::{generate_synthetic_records, SyntheticGenerator, SyntheticRecordIterator};
