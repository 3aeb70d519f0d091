//! Error types for seqlens operations.
//!
//! This module provides the main error type [`SeqlensError`]. The reporting
//! functions themselves never fail; only the project store boundary and the
//! opt-in strict containment policy construct errors, and those propagate to
//! the caller rather than being swallowed.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for seqlens operations.
#[derive(Debug, Error)]
pub enum SeqlensError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open project snapshot {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Ambiguous combined-fragment container: {count} candidates")]
    AmbiguousContainer { count: usize },
}

impl SeqlensError {
    /// Create a new `Open` error for a snapshot that could not be parsed.
    pub fn new_open_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
