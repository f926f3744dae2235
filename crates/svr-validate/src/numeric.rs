//! Strict numeric reading of feature values.
//!
//! Accepted values are passed on as raw text, so a value counts as numeric
//! only when a plain `f64` parse of the trimmed text succeeds. Grouping
//! separators and decimal commas are never stripped.

/// Read a feature value as `f64`.
///
/// Surrounding whitespace is ignored. Signs, exponents and the
/// case-insensitive spellings `nan`, `inf` and `infinity` are accepted;
/// anything a float parser would refuse (`"1,000"`, `"1 000"`, `"1,5"`,
/// `"0x10"`) yields `None`.
pub fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Check if a string represents a valid numeric value.
pub fn is_numeric(value: &str) -> bool {
    parse_numeric(value).is_some()
}
