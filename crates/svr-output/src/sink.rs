//! File-backed dataset sinks.

use std::path::{Path, PathBuf};

use svr_model::NormalizedDataset;
use svr_normalize::DatasetSink;

use crate::error::{OutputError, Result};
use crate::{csv::write_csv, json::write_json};

/// File format of a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Write `dataset` to `path` in this format.
    pub fn write(self, path: &Path, dataset: &NormalizedDataset) -> Result<()> {
        match self {
            Self::Csv => write_csv(path, dataset),
            Self::Json => write_json(path, dataset),
        }
    }
}

/// Writes each stored dataset to a CSV file.
///
/// Storing again overwrites the file.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSink for CsvSink {
    type Error = OutputError;

    fn store(&mut self, dataset: &NormalizedDataset) -> Result<()> {
        write_csv(&self.path, dataset)
    }
}

/// Writes each stored dataset to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSink for JsonSink {
    type Error = OutputError;

    fn store(&mut self, dataset: &NormalizedDataset) -> Result<()> {
        write_json(&self.path, dataset)
    }
}
