//! Flattening of observation documents.

use svr_model::{FlattenedRow, IssueLocation, NormalizedDataset, RawDocument};
use svr_validate::ValueValidator;

use crate::error::{NormalizeError, Rejection, StructureError};

/// Normalize a document into a flat dataset.
///
/// Observations are visited in document order and predictors in order within
/// each observation; rows come out in that same order. Each predictor value is
/// checked with `validator`. The first value with a non-empty verdict aborts
/// the conversion and nothing built so far is returned.
///
/// `feature_count` is the predictor count of the first observation. Later
/// observations are not compared against it.
///
/// # Errors
///
/// - [`NormalizeError::Structure`] when an observation lacks its criterion or
///   predictor list, or a predictor lacks its label or value.
/// - [`NormalizeError::Validation`] for the first rejected value.
pub fn normalize<V>(document: &RawDocument, validator: &V) -> Result<NormalizedDataset, NormalizeError>
where
    V: ValueValidator + ?Sized,
{
    let span = tracing::debug_span!("normalize", observations = document.len());
    let _guard = span.enter();

    let mut rows = Vec::new();
    let mut dependent_labels = Vec::with_capacity(document.len());
    let mut feature_count = None;

    for (observation_index, observation) in document.observations.iter().enumerate() {
        let criterion = observation
            .criterion
            .as_deref()
            .ok_or(StructureError::MissingCriterion {
                observation: observation_index,
            })?;
        let predictors =
            observation
                .predictors
                .as_deref()
                .ok_or(StructureError::MissingPredictors {
                    observation: observation_index,
                })?;

        dependent_labels.push(criterion.to_string());

        for (predictor_index, predictor) in predictors.iter().enumerate() {
            let label = predictor
                .label
                .as_deref()
                .ok_or(StructureError::MissingLabel {
                    observation: observation_index,
                    predictor: predictor_index,
                })?;
            let value = predictor
                .value
                .as_deref()
                .ok_or(StructureError::MissingValue {
                    observation: observation_index,
                    predictor: predictor_index,
                })?;

            let issues = validator.validate_feature(label, value);
            if !issues.is_empty() {
                tracing::debug!(
                    observation = observation_index,
                    predictor = predictor_index,
                    issues = issues.len(),
                    "value rejected, discarding {} accumulated rows",
                    rows.len()
                );
                return Err(NormalizeError::Validation(Rejection {
                    location: IssueLocation {
                        observation: observation_index,
                        predictor: predictor_index,
                        dependent_label: criterion.to_string(),
                        feature: label.to_string(),
                    },
                    issues,
                }));
            }

            rows.push(FlattenedRow::new(criterion, label, value));
        }

        if feature_count.is_none() {
            feature_count = Some(predictors.len());
        }
    }

    tracing::debug!(
        rows = rows.len(),
        observations = dependent_labels.len(),
        feature_count,
        "document normalized"
    );
    Ok(NormalizedDataset::new(rows, dependent_labels, feature_count))
}
