//! Observation dataset normalization.
//!
//! Turns a [`RawDocument`] into a flat [`NormalizedDataset`]: one row per
//! (observation, predictor) pair, the per-observation dependent labels, and
//! the feature count declared by the first observation.
//!
//! # Overview
//!
//! - [`normalize`]: the pure conversion. Every predictor value goes through a
//!   [`ValueValidator`]; the first rejected value aborts the whole document.
//! - [`Converter`]: wires a validator and an [`IssueReporter`] together and
//!   hands rejected documents' issues to the reporter.
//! - [`DatasetSink`]: the capability that receives finished datasets.
//!
//! # Example
//!
//! ```ignore
//! use svr_normalize::{Converter, TracingReporter};
//! use svr_validate::NumericValidator;
//!
//! let converter = Converter::new(NumericValidator::default(), TracingReporter::default());
//! let dataset = converter.convert_xml(&std::fs::read_to_string("observations.xml")?)?;
//! println!("{} rows", dataset.row_count());
//! ```

mod convert;
mod error;
mod normalizer;
mod report;
mod sink;

pub use convert::{ConvertError, Converter};
pub use error::{NormalizeError, Rejection, StructureError};
pub use normalizer::normalize;
pub use report::{
    CapturedReport, CapturingReporter, IssueReporter, REDACTED_VALUE, TracingReporter,
};
pub use sink::DatasetSink;

pub use svr_model::{FlattenedRow, Issue, IssueLocation, NormalizedDataset, RawDocument};
pub use svr_validate::ValueValidator;
