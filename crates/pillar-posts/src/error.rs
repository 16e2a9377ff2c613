//! Error types for the posts store.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing a posts file.
#[derive(Debug, Error)]
pub enum PostsError {
    /// Failed to read the posts file.
    #[error("failed to read posts file {path}: {source}")]
    Read {
        /// Path to the posts file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The posts file is not valid JSON, or an element is not an object.
    #[error("failed to parse posts file {path}: {source}")]
    Parse {
        /// Path to the posts file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The posts file holds valid JSON that is not an array.
    #[error("posts file {path} must contain a JSON array")]
    NotAnArray {
        /// Path to the posts file.
        path: PathBuf,
    },

    /// Failed to write the temporary file next to the target.
    #[error("failed to write posts file {path}: {source}")]
    Write {
        /// Path to the posts file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to move the temporary file over the target.
    #[error("failed to replace posts file {path}: {source}")]
    Persist {
        /// Path to the posts file being replaced.
        path: PathBuf,
        /// Underlying persist error.
        source: tempfile::PersistError,
    },
}
