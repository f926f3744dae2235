//! Conversion pipeline: ingest, normalize, report, store.

use std::path::Path;

use svr_ingest::IngestError;
use svr_model::{NormalizedDataset, RawDocument};
use svr_validate::ValueValidator;
use thiserror::Error;

use crate::error::NormalizeError;
use crate::normalizer::normalize;
use crate::report::IssueReporter;
use crate::sink::DatasetSink;

/// Errors from the full conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Document could not be read or parsed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Document was parsed but rejected.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// Sink failed to store the dataset.
    #[error("failed to store dataset: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Validator and reporter bound together for repeated conversions.
///
/// Holds no per-document state, so one converter can serve many documents,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct Converter<V, R> {
    validator: V,
    reporter: R,
}

impl<V, R> Converter<V, R>
where
    V: ValueValidator,
    R: IssueReporter,
{
    pub fn new(validator: V, reporter: R) -> Self {
        Self {
            validator,
            reporter,
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Normalize a parsed document.
    ///
    /// On failure the error descriptors go to the reporter exactly once and
    /// the error is returned; no dataset is produced.
    pub fn convert(&self, document: &RawDocument) -> Result<NormalizedDataset, NormalizeError> {
        normalize(document, &self.validator)
            .inspect_err(|error| self.reporter.report(&error.issues(), error.location()))
    }

    /// Parse and normalize an XML document held in memory.
    pub fn convert_xml(&self, source: &str) -> Result<NormalizedDataset, ConvertError> {
        let document = svr_ingest::parse_xml(source)?;
        Ok(self.convert(&document)?)
    }

    /// Read, parse and normalize a document file (`.xml` or `.json`).
    pub fn convert_path(&self, path: &Path) -> Result<NormalizedDataset, ConvertError> {
        let document = svr_ingest::read_document(path)?;
        let dataset = self.convert(&document)?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.row_count(),
            observations = dataset.observation_count(),
            "converted document"
        );
        Ok(dataset)
    }

    /// Convert a document and hand the dataset to `sink`.
    ///
    /// The sink is only called for accepted documents.
    pub fn convert_into<S: DatasetSink>(
        &self,
        document: &RawDocument,
        sink: &mut S,
    ) -> Result<NormalizedDataset, ConvertError> {
        let dataset = self.convert(document)?;
        sink.store(&dataset)
            .map_err(|error| ConvertError::Sink(Box::new(error)))?;
        Ok(dataset)
    }
}
