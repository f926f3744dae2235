//! Validator-owned configuration: per-feature numeric rules.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric type a feature value must convert to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    /// Any finite real number.
    #[default]
    Decimal,
    /// A number without a fractional part.
    Integer,
}

/// Constraints applied to the values of one feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureRule {
    pub kind: NumericKind,
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// Maximum length of the trimmed raw text, in characters.
    pub max_length: Option<usize>,
    /// Accept `nan` / `inf` spellings.
    pub allow_non_finite: bool,
}

impl FeatureRule {
    #[must_use]
    pub fn integer() -> Self {
        Self {
            kind: NumericKind::Integer,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_range(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn with_non_finite(mut self, allow: bool) -> Self {
        self.allow_non_finite = allow;
        self
    }

    fn check(&self, feature: &str) -> Result<(), RulesError> {
        for bound in [self.min, self.max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(RulesError::NonFiniteBound {
                    feature: feature.to_string(),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(RulesError::InvalidBounds {
                feature: feature.to_string(),
                min,
                max,
            });
        }
        if self.max_length == Some(0) {
            return Err(RulesError::ZeroLength {
                feature: feature.to_string(),
            });
        }
        Ok(())
    }
}

/// Rule set: a default rule plus overrides keyed by feature label.
///
/// ```json
/// {
///   "default": { "kind": "decimal" },
///   "features": { "age": { "kind": "integer", "min": 0, "max": 130 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    pub default: FeatureRule,
    pub features: BTreeMap<String, FeatureRule>,
}

/// Label used for the default rule in error messages.
const DEFAULT_RULE_NAME: &str = "<default>";

impl ValidationRules {
    pub fn new(default: FeatureRule) -> Self {
        Self {
            default,
            features: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_feature(mut self, label: impl Into<String>, rule: FeatureRule) -> Self {
        self.features.insert(label.into(), rule);
        self
    }

    /// Rule for a feature label, falling back to the default rule.
    pub fn rule_for(&self, label: &str) -> &FeatureRule {
        self.features.get(label).unwrap_or(&self.default)
    }

    /// Check that every rule is internally consistent.
    pub fn check(&self) -> Result<(), RulesError> {
        self.default.check(DEFAULT_RULE_NAME)?;
        for (label, rule) in &self.features {
            rule.check(label)?;
        }
        Ok(())
    }

    /// Parse and check a JSON rule set.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.check()?;
        Ok(rules)
    }

    /// Load and check a JSON rule set from disk.
    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            features = rules.features.len(),
            "loaded validation rules"
        );
        Ok(rules)
    }
}

/// Errors raised while loading a rule set.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Failed to read the rules file.
    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rules file is not valid JSON or has unknown fields.
    #[error("invalid rules JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Lower bound exceeds upper bound.
    #[error("rule for {feature}: min {min} is greater than max {max}")]
    InvalidBounds { feature: String, min: f64, max: f64 },

    /// A bound is NaN or infinite.
    #[error("rule for {feature}: bounds must be finite")]
    NonFiniteBound { feature: String },

    /// A zero maximum length would reject every value.
    #[error("rule for {feature}: max_length must be greater than zero")]
    ZeroLength { feature: String },
}
