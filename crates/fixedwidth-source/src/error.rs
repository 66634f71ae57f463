//! Error types for layout loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that halt layout loading.
///
/// Row-level problems are never errors; they are skipped with a diagnostic.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The layout source does not exist.
    #[error("Layout file not found at: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
