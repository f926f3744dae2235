//! Value validation for observation feature values.
//!
//! A validator inspects one scalar at a time and returns the list of
//! [`Issue`]s explaining why it is unacceptable. An empty list means the
//! value was accepted. Invalid input is an ordinary outcome here, never a
//! panic or an `Err`.
//!
//! # Example
//!
//! ```ignore
//! use svr_validate::{NumericValidator, ValidationRules, ValueValidator};
//!
//! let rules = ValidationRules::from_json_str(r#"{"default": {"min": 0}}"#)?;
//! let validator = NumericValidator::new(rules);
//!
//! assert!(validator.validate("4.2").is_empty());
//! assert_eq!(validator.validate("-1").len(), 1);
//! ```

mod numeric;
mod rules;
mod validator;

pub use numeric::{is_numeric, parse_numeric};
pub use rules::{FeatureRule, NumericKind, RulesError, ValidationRules};
pub use validator::{NumericValidator, ValueValidator, check_value};

pub use svr_model::Issue;
