//! Error types for requests and configuration.
//!
//! The gesture path never fails: absent callbacks are skipped and stray
//! releases are ignored. Only programmatic requests and option loading
//! can report an error.

use std::path::PathBuf;
use thiserror::Error;

/// Why a programmatic request was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Neither an absolute position nor a delta was supplied
    #[error("Request carries no position: expected {{x, y}} or {{deltaX, deltaY}}")]
    Empty,

    /// One coordinate of a pair was supplied without its partner
    #[error("Request is missing `{0}`")]
    Incomplete(&'static str),
}

/// Errors that can occur while loading [`crate::DragOptions`].
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The options file could not be read
    #[error("Failed to read options from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The options document is not valid JSON for `DragOptions`
    #[error("Invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for programmatic requests
pub type RequestResult<T> = Result<T, RequestError>;

/// Result type alias for option loading
pub type OptionsResult<T> = Result<T, OptionsError>;
