//! Error types for annotation ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading annotation documents.
///
/// Every variant is fatal for a conversion run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("annotation file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an object.
    #[error("expected a JSON object at the top level of {path}, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    /// An entry value is not an array of arrays of strings.
    #[error("invalid annotation for '{key}' in {path}: {source}")]
    InvalidAnnotation {
        path: PathBuf,
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
