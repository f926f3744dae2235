//! Observation document ingestion.
//!
//! This crate adapts a serialized observation document into the typed
//! [`RawDocument`] consumed by the normalizer. Two serializations share the
//! same element names:
//!
//! - **XML**: `<dataset><observation><criterion/><predictor><label/><value/></predictor></observation></dataset>`
//! - **JSON**: `{"dataset": {"observation": [{"criterion": .., "predictor": [{"label": .., "value": ..}]}]}}`
//!
//! Ingestion only checks what a parser can see (well-formedness, root
//! element, duplicate fields). Missing fields are kept as `None` so the
//! normalizer reports them as structural errors in traversal order.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use svr_ingest::{parse_xml, read_document};
//!
//! let document = read_document(Path::new("data/observations.xml"))?;
//! let inline = parse_xml("<dataset/>")?;
//! assert!(inline.is_empty());
//! ```

mod error;
mod json;
mod reader;
mod xml;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use json::parse_json;
pub use xml::parse_xml;

// === File Reading ===
pub use reader::{
    DocumentFormat, MAX_DOCUMENT_SIZE, check_file_size, check_file_size_with_limit, read_document,
    read_document_as,
};

pub use svr_model::RawDocument;

/// Element and key names shared by both serializations.
pub(crate) mod names {
    pub const DATASET: &str = "dataset";
    pub const OBSERVATION: &str = "observation";
    pub const CRITERION: &str = "criterion";
    pub const PREDICTOR: &str = "predictor";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
}
