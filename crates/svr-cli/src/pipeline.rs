//! Conversion pipeline shared by the CLI commands.
//!
//! Each stage returns `anyhow` errors with context; a rejected document is
//! not an error here but a [`ConvertOutcome`] carrying the rejection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use svr_model::{NormalizedDataset, RawDocument};
use svr_normalize::{Converter, NormalizeError, TracingReporter};
use svr_output::OutputFormat;
use svr_validate::{NumericValidator, ValidationRules};

use crate::logging::log_data_enabled;

/// Process exit code for a rejected document.
pub const EXIT_REJECTED: i32 = 1;

/// Process exit code for operational failures (logging setup, unreadable
/// input, invalid rules, unwritable output).
pub const EXIT_ERROR: i32 = 2;

/// Result of running one document through the pipeline.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub document: PathBuf,
    /// Observations found in the parsed document.
    pub observations: usize,
    pub result: std::result::Result<NormalizedDataset, NormalizeError>,
    /// File written for an accepted document, if any.
    pub output: Option<PathBuf>,
}

impl ConvertOutcome {
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }

    /// `0` for an accepted document, [`EXIT_REJECTED`] otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_rejected() { EXIT_REJECTED } else { 0 }
    }
}

/// Where and how to write an accepted dataset.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Load the rule set, or the default decimal rule when no file is given.
pub fn load_validator(rules: Option<&Path>) -> Result<NumericValidator> {
    let rules = match rules {
        Some(path) => ValidationRules::from_path(path)
            .with_context(|| format!("load rules {}", path.display()))?,
        None => ValidationRules::default(),
    };
    Ok(NumericValidator::new(rules))
}

/// Default output path: `<stem>.normalized.<ext>` next to the document.
pub fn default_output_path(document: &Path, format: OutputFormat) -> PathBuf {
    let stem = document
        .file_stem()
        .map_or_else(|| "dataset".into(), |s| s.to_string_lossy());
    document.with_file_name(format!("{stem}.normalized.{}", format.extension()))
}

pub fn ingest(document: &Path) -> Result<RawDocument> {
    let raw = svr_ingest::read_document(document)
        .with_context(|| format!("read {}", document.display()))?;
    debug!(observations = raw.len(), "parsed document");
    Ok(raw)
}

/// Parse, validate and normalize `document`, writing the dataset when
/// `output` is set and the document is accepted.
pub fn convert(
    document: &Path,
    validator: &NumericValidator,
    output: Option<&OutputConfig>,
) -> Result<ConvertOutcome> {
    let span = info_span!("document", path = %document.display());
    let _guard = span.enter();

    let raw = ingest(document)?;
    let converter = Converter::new(
        validator,
        TracingReporter::default().with_values(log_data_enabled()),
    );
    let result = converter.convert(&raw);

    let mut written = None;
    if let (Ok(dataset), Some(output)) = (&result, output) {
        output
            .format
            .write(&output.path, dataset)
            .with_context(|| format!("write {}", output.path.display()))?;
        info!(path = %output.path.display(), rows = dataset.row_count(), "wrote dataset");
        written = Some(output.path.clone());
    }

    Ok(ConvertOutcome {
        document: document.to_path_buf(),
        observations: raw.len(),
        result,
        output: written,
    })
}
