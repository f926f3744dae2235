//! Error types for document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or adapting a document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Document file not found.
    #[error("document not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("document {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File extension does not map to a known format.
    #[error("unsupported document format for {path} (expected .xml or .json)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// XML is not well-formed.
    #[error("XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// JSON is not well-formed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Shape Errors ===
    /// Root element or key is not `dataset`.
    #[error("expected root '{expected}', found '{found}'")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// Document is parseable but cannot be adapted (duplicate fields, nested values).
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },
}

impl IngestError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
