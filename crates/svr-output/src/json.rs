//! JSON export with provenance fields.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use svr_model::{FlattenedRow, NormalizedDataset};

use crate::digest::dataset_digest;
use crate::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Schema identifier written into every payload.
pub const SCHEMA: &str = "svr.normalized-dataset";

/// Version of the payload layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Serialized form of a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub digest: String,
    pub observation_count: usize,
    pub feature_count: Option<usize>,
    pub dependent_labels: &'a [String],
    pub rows: &'a [FlattenedRow],
}

impl<'a> DatasetPayload<'a> {
    pub fn new(dataset: &'a NormalizedDataset, generated_at: DateTime<Utc>) -> Self {
        Self {
            schema: SCHEMA,
            schema_version: SCHEMA_VERSION,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            digest: dataset_digest(dataset),
            observation_count: dataset.observation_count(),
            feature_count: dataset.feature_count(),
            dependent_labels: dataset.dependent_labels(),
            rows: dataset.rows(),
        }
    }
}

/// Render the payload as pretty-printed JSON with a trailing newline.
pub fn render_json(dataset: &NormalizedDataset, generated_at: DateTime<Utc>) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(&DatasetPayload::new(dataset, generated_at))?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the payload to `path`, stamped with the current time.
pub fn write_json(path: &Path, dataset: &NormalizedDataset) -> Result<()> {
    ensure_parent_dir(path)?;
    let rendered = render_json(dataset, Utc::now())?;
    fs::write(path, rendered).map_err(|source| OutputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rows = dataset.row_count(), "wrote JSON");
    Ok(())
}
