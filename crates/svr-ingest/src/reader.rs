//! Document file reading with format detection and size limits.

use std::path::Path;

use svr_model::RawDocument;

use crate::error::{IngestError, Result};
use crate::json::parse_json;
use crate::xml::parse_xml;

/// Maximum document size accepted by [`read_document`] (256 MB).
pub const MAX_DOCUMENT_SIZE: u64 = 256 * 1024 * 1024;

/// Serialization of an observation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Xml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub fn parse(self, source: &str) -> Result<RawDocument> {
        match self {
            Self::Xml => parse_xml(source),
            Self::Json => parse_json(source),
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_DOCUMENT_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read and adapt a document, detecting the format from its extension.
///
/// The file handle is released before parsing starts, on success and on
/// failure alike.
pub fn read_document(path: &Path) -> Result<RawDocument> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    read_document_as(path, format)
}

/// Read and adapt a document with an explicit format.
pub fn read_document_as(path: &Path, format: DocumentFormat) -> Result<RawDocument> {
    check_file_size(path)?;
    let source = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    // Skip BOM if present
    let source = source.strip_prefix('\u{feff}').unwrap_or(&source);

    tracing::debug!(path = %path.display(), ?format, bytes = source.len(), "reading document");
    format.parse(source)
}

fn file_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
