//! Error types for star chart extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an extraction run.
///
/// A star whose element or coordinates cannot be found is not an error; it
/// is simply left out of the catalog.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading the chart or writing a catalog file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text matched by a coordinate or scale pattern is not a valid float.
    #[error("Malformed number {text:?} on line {line}")]
    MalformedNumber { line: usize, text: String },

    /// Catalog encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values that would make the projection meaningless.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ExtractError {
    /// I/O failure on `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
