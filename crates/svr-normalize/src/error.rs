//! Failure results of normalization.

use svr_model::{Issue, IssueLocation};
use thiserror::Error;

/// The document does not have the observation/predictor shape.
///
/// Indices are zero-based positions in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("observation[{observation}] has no criterion")]
    MissingCriterion { observation: usize },

    #[error("observation[{observation}] has no predictor list")]
    MissingPredictors { observation: usize },

    #[error("observation[{observation}].predictor[{predictor}] has no label")]
    MissingLabel { observation: usize, predictor: usize },

    #[error("observation[{observation}].predictor[{predictor}] has no value")]
    MissingValue { observation: usize, predictor: usize },
}

impl StructureError {
    /// Render as an error descriptor.
    pub fn to_issue(&self) -> Issue {
        let (path, field) = match self {
            Self::MissingCriterion { observation } => {
                (format!("observation[{observation}]"), "criterion")
            }
            Self::MissingPredictors { observation } => {
                (format!("observation[{observation}]"), "predictor")
            }
            Self::MissingLabel {
                observation,
                predictor,
            } => (
                format!("observation[{observation}].predictor[{predictor}]"),
                "label",
            ),
            Self::MissingValue {
                observation,
                predictor,
            } => (
                format!("observation[{observation}].predictor[{predictor}]"),
                "value",
            ),
        };
        Issue::MissingField {
            path,
            field: field.to_string(),
        }
    }
}

/// A predictor value rejected by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub location: IssueLocation,
    /// Validator verdict, never empty.
    pub issues: Vec<Issue>,
}

/// Why a document produced no dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Document shape is wrong.
    #[error("malformed document: {0}")]
    Structure(#[from] StructureError),

    /// A value failed validation; processing stopped there.
    #[error("value rejected at {}: {}", .0.location, issue_summary(&.0.issues))]
    Validation(Rejection),
}

fn issue_summary(issues: &[Issue]) -> String {
    match issues {
        [single] => single.message(),
        _ => format!("{} issues", issues.len()),
    }
}

impl NormalizeError {
    /// Error descriptors for the reporting collaborator (never empty).
    pub fn issues(&self) -> Vec<Issue> {
        match self {
            Self::Structure(error) => vec![error.to_issue()],
            Self::Validation(rejection) => rejection.issues.clone(),
        }
    }

    /// Location of the rejected value, for validation failures.
    pub fn location(&self) -> Option<&IssueLocation> {
        match self {
            Self::Structure(_) => None,
            Self::Validation(rejection) => Some(&rejection.location),
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structure(_))
    }
}
