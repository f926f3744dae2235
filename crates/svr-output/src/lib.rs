//! Output generation for normalized datasets.
//!
//! - [`write_csv`] / [`write_csv_to`]: one line per flattened row.
//! - [`write_json`] / [`render_json`]: the dataset with provenance fields.
//! - [`dataset_digest`]: content hash stable across runs.
//! - [`to_dataframe`]: a Polars frame for model-fitting consumers.
//! - [`CsvSink`] / [`JsonSink`]: [`DatasetSink`](svr_normalize::DatasetSink)
//!   implementations over the writers above.

mod csv;
mod digest;
mod error;
mod frame;
mod json;
mod sink;

pub use crate::csv::{CSV_HEADER, write_csv, write_csv_to};
pub use digest::dataset_digest;
pub use error::{OutputError, Result};
pub use frame::to_dataframe;
pub use json::{DatasetPayload, SCHEMA, SCHEMA_VERSION, render_json, write_json};
pub use sink::{CsvSink, JsonSink, OutputFormat};

use std::fs;
use std::path::Path;

/// Ensure a parent directory exists for a file path.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
