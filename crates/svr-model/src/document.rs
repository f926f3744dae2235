//! Typed intermediate form of an observation document.
//!
//! Ingestion adapts a parsed document into these types. Fields that the
//! document may omit are kept optional so the normalizer can tell a missing
//! key apart from an empty value.

use serde::{Deserialize, Serialize};

/// One independent-variable entry (a predictor) of an observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPredictor {
    /// Feature label, `None` when the entry has no `label` field.
    pub label: Option<String>,
    /// Raw scalar text, `None` when the entry has no `value` field.
    pub value: Option<String>,
}

impl RawPredictor {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
        }
    }
}

/// One observation: a dependent-variable label (criterion) plus its predictors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Dependent-variable label, `None` when the `criterion` field is absent.
    pub criterion: Option<String>,
    /// Predictor entries in document order, `None` when the `predictor` key is absent.
    pub predictors: Option<Vec<RawPredictor>>,
}

impl RawObservation {
    /// Build a well-formed observation from `(label, value)` pairs.
    pub fn new<L, V>(criterion: impl Into<String>, predictors: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            criterion: Some(criterion.into()),
            predictors: Some(
                predictors
                    .into_iter()
                    .map(|(label, value)| RawPredictor::new(label, value))
                    .collect(),
            ),
        }
    }

    /// Number of predictor entries (0 when the key is absent).
    pub fn predictor_count(&self) -> usize {
        self.predictors.as_ref().map_or(0, Vec::len)
    }
}

/// A whole observation document in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub observations: Vec<RawObservation>,
}

impl RawDocument {
    pub fn new(observations: Vec<RawObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<RawObservation> for RawDocument {
    fn from_iter<I: IntoIterator<Item = RawObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_new_keeps_predictor_order() {
        let observation = RawObservation::new("A", [("x1", "1"), ("x2", "2")]);
        let labels: Vec<_> = observation
            .predictors
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec!["x1", "x2"]);
        assert_eq!(observation.predictor_count(), 2);
    }

    #[test]
    fn missing_predictor_key_counts_as_zero() {
        let observation = RawObservation {
            criterion: Some("A".to_string()),
            predictors: None,
        };
        assert_eq!(observation.predictor_count(), 0);
    }
}
