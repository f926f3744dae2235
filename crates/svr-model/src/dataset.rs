//! Normalized (flattened) dataset representation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One flattened row: a single (observation, predictor) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlattenedRow {
    /// Dependent-variable label of the source observation.
    pub dependent_label: String,
    /// Label of the independent variable.
    pub independent_label: String,
    /// Raw scalar value, as accepted by validation.
    pub independent_value: String,
}

impl FlattenedRow {
    pub fn new(
        dependent_label: impl Into<String>,
        independent_label: impl Into<String>,
        independent_value: impl Into<String>,
    ) -> Self {
        Self {
            dependent_label: dependent_label.into(),
            independent_label: independent_label.into(),
            independent_value: independent_value.into(),
        }
    }
}

/// Result of a successful conversion.
///
/// Rows keep document traversal order (observation order, then predictor
/// order). `dependent_labels` holds one entry per observation with duplicates
/// preserved. The value is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDataset {
    rows: Vec<FlattenedRow>,
    dependent_labels: Vec<String>,
    feature_count: Option<usize>,
}

impl NormalizedDataset {
    pub fn new(
        rows: Vec<FlattenedRow>,
        dependent_labels: Vec<String>,
        feature_count: Option<usize>,
    ) -> Self {
        Self {
            rows,
            dependent_labels,
            feature_count,
        }
    }

    pub fn rows(&self) -> &[FlattenedRow] {
        &self.rows
    }

    pub fn dependent_labels(&self) -> &[String] {
        &self.dependent_labels
    }

    /// Predictor count of the first observation, `None` for an empty document.
    pub fn feature_count(&self) -> Option<usize> {
        self.feature_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn observation_count(&self) -> usize {
        self.dependent_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.dependent_labels.is_empty()
    }

    /// Distinct dependent-variable labels in first-seen order.
    pub fn distinct_dependent_labels(&self) -> Vec<&str> {
        first_seen(self.dependent_labels.iter().map(String::as_str))
    }

    /// Distinct independent-variable labels in first-seen order.
    pub fn distinct_features(&self) -> Vec<&str> {
        first_seen(self.rows.iter().map(|row| row.independent_label.as_str()))
    }

    pub fn into_parts(self) -> (Vec<FlattenedRow>, Vec<String>, Option<usize>) {
        (self.rows, self.dependent_labels, self.feature_count)
    }
}

fn first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}
