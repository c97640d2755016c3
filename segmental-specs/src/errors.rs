//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture file is not a valid fixture document.
    #[error("failed to parse fixture: {path}: {message}")]
    Parse { path: String, message: String },

    /// The decomposer under test could not be built.
    #[error("failed to build decomposer: {0}")]
    Decomposer(#[from] segmental::SegmentalError),
}

/// Result type for fixture operations.
pub type SpecResult<T> = Result<T, SpecError>;
