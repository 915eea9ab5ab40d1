//! Input validation for form values
//!
//! Weight and height arrive as free text from the form (or as JSON numbers
//! from the API). They are accepted only when they read as plain decimal
//! numbers that are finite and strictly positive.

use crate::errors::{InputField, InvalidReason, ValidationError};
use regex_lite::Regex;
use std::sync::OnceLock;

/// Plain decimal with optional sign and exponent. Rejects the `inf`/`NaN`
/// spellings that `f64::from_str` would otherwise accept.
const DECIMAL_PATTERN: &str = r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$";

/// Oldest age the form accepts
pub const MAX_AGE_YEARS: u32 = 150;

fn decimal_regex() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| Regex::new(DECIMAL_PATTERN).expect("decimal pattern is valid"))
}

/// Parse a raw form value into a number
///
/// Blank or absent input is `Missing`; anything that is not a plain
/// decimal is `NotANumber`. The sign is not checked here.
pub fn parse_decimal(field: InputField, raw: Option<&str>) -> Result<f64, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::new(field, InvalidReason::Missing));
    }
    if !decimal_regex().is_match(text) {
        return Err(ValidationError::new(field, InvalidReason::NotANumber));
    }
    text.parse::<f64>()
        .map_err(|_| ValidationError::new(field, InvalidReason::NotANumber))
}

/// Require a finite, strictly positive value
pub fn validate_positive(field: InputField, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(field, InvalidReason::NotFinite));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(field, InvalidReason::NotPositive));
    }
    Ok(value)
}

/// Parse and validate a weight or height entered as text
pub fn parse_positive(field: InputField, raw: Option<&str>) -> Result<f64, ValidationError> {
    let value = parse_decimal(field, raw)?;
    validate_positive(field, value)
}

/// Parse the optional age field
///
/// Age never affects the result, so anything that is not a whole number
/// in 1..=150 is treated as not provided.
pub fn parse_age(raw: Option<&str>) -> Option<u32> {
    let text = raw.map(str::trim).filter(|t| !t.is_empty())?;
    text.parse::<u32>()
        .ok()
        .filter(|age| (1..=MAX_AGE_YEARS).contains(age))
}
