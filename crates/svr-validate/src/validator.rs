//! Value validator trait and the default numeric validator.

use svr_model::Issue;

use crate::numeric::parse_numeric;
use crate::rules::{FeatureRule, NumericKind, ValidationRules};

/// Checks one scalar value and reports why it is unacceptable.
///
/// Implementations must be free of side effects: the same input always
/// yields the same verdict, and no state carries over between calls.
pub trait ValueValidator: Send + Sync {
    /// Validate a value without feature context. Empty result = accepted.
    fn validate(&self, value: &str) -> Vec<Issue>;

    /// Validate a value belonging to the feature `label`.
    ///
    /// Validators with per-feature rules override this; the default ignores
    /// the label.
    fn validate_feature(&self, label: &str, value: &str) -> Vec<Issue> {
        let _ = label;
        self.validate(value)
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for &V {
    fn validate(&self, value: &str) -> Vec<Issue> {
        (**self).validate(value)
    }

    fn validate_feature(&self, label: &str, value: &str) -> Vec<Issue> {
        (**self).validate_feature(label, value)
    }
}

impl<V: ValueValidator + ?Sized> ValueValidator for Box<V> {
    fn validate(&self, value: &str) -> Vec<Issue> {
        (**self).validate(value)
    }

    fn validate_feature(&self, label: &str, value: &str) -> Vec<Issue> {
        (**self).validate_feature(label, value)
    }
}

/// Rule-driven validator for numeric feature values.
#[derive(Debug, Clone, Default)]
pub struct NumericValidator {
    rules: ValidationRules,
}

impl NumericValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }
}

impl ValueValidator for NumericValidator {
    fn validate(&self, value: &str) -> Vec<Issue> {
        check_value(&self.rules.default, value)
    }

    fn validate_feature(&self, label: &str, value: &str) -> Vec<Issue> {
        check_value(self.rules.rule_for(label), value)
    }
}

/// Run every check of `rule` against `value`.
///
/// Missing, non-numeric and non-finite values stop at the first failure since
/// later checks need a parsed number. Integer, range and length checks
/// accumulate.
pub fn check_value(rule: &FeatureRule, value: &str) -> Vec<Issue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return vec![Issue::Missing {
            value: value.to_string(),
        }];
    }

    let Some(parsed) = parse_numeric(trimmed) else {
        return vec![Issue::NotNumeric {
            value: value.to_string(),
        }];
    };

    if !parsed.is_finite() {
        if rule.allow_non_finite {
            return Vec::new();
        }
        return vec![Issue::NonFinite {
            value: value.to_string(),
        }];
    }

    let mut issues = Vec::new();

    if rule.kind == NumericKind::Integer && parsed.fract() != 0.0 {
        issues.push(Issue::NotInteger {
            value: value.to_string(),
            parsed,
        });
    }

    if let Some(min) = rule.min
        && parsed < min
    {
        issues.push(Issue::BelowMinimum {
            value: value.to_string(),
            parsed,
            min,
        });
    }

    if let Some(max) = rule.max
        && parsed > max
    {
        issues.push(Issue::AboveMaximum {
            value: value.to_string(),
            parsed,
            max,
        });
    }

    if let Some(max_length) = rule.max_length {
        let length = trimmed.chars().count();
        if length > max_length {
            issues.push(Issue::TooLong {
                value: value.to_string(),
                length,
                max_length,
            });
        }
    }

    issues
}
