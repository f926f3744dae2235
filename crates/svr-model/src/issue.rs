//! Error descriptors.
//!
//! Each [`Issue`] variant carries only the data its check needs, including the
//! offending raw value, so a caller can render a diagnostic without access to
//! the source document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping of checks, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Value or field is absent.
    Presence,
    /// Value cannot be read as the expected numeric type.
    Format,
    /// Value falls outside the configured bounds.
    Range,
    /// Value exceeds a size limit.
    Limit,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Format => "Format",
            Self::Range => "Range",
            Self::Limit => "Limit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reason why a value (or the document shape) was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Issue {
    // Presence checks
    /// Value is empty or whitespace only.
    Missing { value: String },
    /// Document entry lacks a required field.
    MissingField { path: String, field: String },

    // Format checks
    /// Value cannot be parsed as a number.
    NotNumeric { value: String },
    /// Value parses to NaN or an infinity.
    NonFinite { value: String },
    /// Value has a fractional part where an integer is required.
    NotInteger { value: String, parsed: f64 },

    // Range checks
    /// Value is smaller than the configured minimum.
    BelowMinimum { value: String, parsed: f64, min: f64 },
    /// Value is larger than the configured maximum.
    AboveMaximum { value: String, parsed: f64, max: f64 },

    // Limit checks
    /// Raw text is longer than the configured maximum length.
    TooLong {
        value: String,
        length: usize,
        max_length: usize,
    },
}

impl Issue {
    /// Stable identifier for the failed check.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Issue::Missing { .. } => "SVR0001",
            Issue::NotNumeric { .. } => "SVR0002",
            Issue::NonFinite { .. } => "SVR0003",
            Issue::NotInteger { .. } => "SVR0004",
            Issue::BelowMinimum { .. } => "SVR0005",
            Issue::AboveMaximum { .. } => "SVR0006",
            Issue::TooLong { .. } => "SVR0007",
            Issue::MissingField { .. } => "SVR0100",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::Missing { .. } | Issue::MissingField { .. } => Category::Presence,
            Issue::NotNumeric { .. } | Issue::NonFinite { .. } | Issue::NotInteger { .. } => {
                Category::Format
            }
            Issue::BelowMinimum { .. } | Issue::AboveMaximum { .. } => Category::Range,
            Issue::TooLong { .. } => Category::Limit,
        }
    }

    /// The offending raw value (empty for structural issues).
    pub fn value(&self) -> &str {
        match self {
            Issue::Missing { value }
            | Issue::NotNumeric { value }
            | Issue::NonFinite { value }
            | Issue::NotInteger { value, .. }
            | Issue::BelowMinimum { value, .. }
            | Issue::AboveMaximum { value, .. }
            | Issue::TooLong { value, .. } => value,
            Issue::MissingField { .. } => "",
        }
    }

    /// Describe the failed check without echoing the value.
    pub fn check_description(&self) -> String {
        match self {
            Issue::Missing { .. } => "value is empty".to_string(),
            Issue::NotNumeric { .. } => "value is not numeric".to_string(),
            Issue::NonFinite { .. } => "value is not a finite number".to_string(),
            Issue::NotInteger { .. } => "value is not an integer".to_string(),
            Issue::BelowMinimum { min, .. } => format!("value is below the minimum {min}"),
            Issue::AboveMaximum { max, .. } => format!("value is above the maximum {max}"),
            Issue::TooLong { max_length, .. } => {
                format!("value exceeds {max_length} characters")
            }
            Issue::MissingField { path, field } => {
                format!("{path} is missing required field '{field}'")
            }
        }
    }

    /// Full diagnostic message including the offending value.
    pub fn message(&self) -> String {
        match self {
            Issue::Missing { .. } => "Value is empty".to_string(),
            Issue::NotNumeric { value } => format!("Value '{value}' is not numeric"),
            Issue::NonFinite { value } => format!("Value '{value}' is not a finite number"),
            Issue::NotInteger { value, .. } => format!("Value '{value}' is not an integer"),
            Issue::BelowMinimum { value, min, .. } => {
                format!("Value '{value}' is below the minimum {min}")
            }
            Issue::AboveMaximum { value, max, .. } => {
                format!("Value '{value}' is above the maximum {max}")
            }
            Issue::TooLong {
                value,
                length,
                max_length,
            } => format!("Value '{value}' is {length} characters long (max {max_length})"),
            Issue::MissingField { path, field } => {
                format!("{path} is missing required field '{field}'")
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule_id(), self.message())
    }
}

/// Position of a rejected predictor within the source document (zero-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLocation {
    pub observation: usize,
    pub predictor: usize,
    pub dependent_label: String,
    pub feature: String,
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observation {} ('{}'), predictor {} ('{}')",
            self.observation, self.dependent_label, self.predictor, self.feature
        )
    }
}
