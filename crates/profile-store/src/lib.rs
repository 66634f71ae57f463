//! Profile persistence for fixedwidth-synth
//!
//! Saves and loads annotated profile sets keyed by layout name, so a profile
//! learned once can drive any number of later generation runs.
//!
//! ## Storage Backends
//!
//! - `FilesystemStore` - Stores profiles as JSON files, one per layout name
//! - `MemoryStore` - Keeps serialized profiles in process
//!
//! Callers construct a store and pass it explicitly; there is no global
//! store handle.

mod file;
mod filesystem;
mod memory;
pub mod store;


pub use file::ProfileFile;
pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;
pub use store::{validate_layout_name, ProfileStore};
