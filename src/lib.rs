//! fixedwidth-synth library
//!
//! Learns per-column patterns from fixed-width legacy data files and
//! generates synthetic records that follow them.
//!
//! # Pipeline
//!
//! ```text
//! layout CSV ──► Layout ──► decode ──► profile ──► classify ──► ProfileStore
//!                                                                   │
//!                         SyntheticRecord ◄── generate ◄── load ◄───┘
//! ```
//!
//! Each stage lives in its own crate:
//!
//! - `fixedwidth_source` - layout decoding and fixed-width record slicing
//! - `column_profiler` - per-column statistics
//! - `pattern_classifier` - rule-based and model-backed pattern classification
//! - `synth_generator` - seeded synthetic record generation
//! - `profile_store` - profile persistence keyed by layout name
//!
//! # CLI Usage
//!
//! ```bash
//! # Inspect a layout
//! fixedwidth-synth layout --layout-file orders_layout.csv
//!
//! # Learn and save a profile
//! fixedwidth-synth profile --layout-file orders_layout.csv --data-file orders.txt \
//!   --layout-name orders
//!
//! # Generate 1000 records as fixed-width lines
//! fixedwidth-synth generate --layout-name orders --volume 1000 --format fixed-width
//! ```

pub mod args;
pub mod pipeline;

pub use args::{ClassifierOpts, GenerateArgs, LayoutArgs, OutputFormat, ProfileArgs, StoreOpts};
