//! Command handlers.
//!
//! Each handler takes its parsed arguments plus explicit collaborators (the
//! profile store, an output writer) so the whole pipeline can be driven
//! from tests without touching process-wide state.

pub mod generate;
pub mod layout;
pub mod profile;

pub use generate::{run_generate, write_records};
pub use layout::{read_layout, run_layout};
pub use profile::{build_classifier, learn_profile, run_profile};
