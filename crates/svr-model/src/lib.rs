//! Core data model for observation dataset normalization.
//!
//! This crate defines the types shared by every stage of the conversion:
//!
//! - **Raw document**: the typed intermediate produced by ingestion
//!   ([`RawDocument`], [`RawObservation`], [`RawPredictor`])
//! - **Normalized dataset**: the flat tabular result ([`NormalizedDataset`],
//!   [`FlattenedRow`])
//! - **Issues**: error descriptors produced by value validation and
//!   structural checks ([`Issue`], [`IssueLocation`], [`Category`])

mod dataset;
mod document;
mod issue;

pub use dataset::{FlattenedRow, NormalizedDataset};
pub use document::{RawDocument, RawObservation, RawPredictor};
pub use issue::{Category, Issue, IssueLocation};
