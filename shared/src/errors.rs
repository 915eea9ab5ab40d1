//! Error types for the BMI calculator

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message shown to the user whenever a measurement is rejected
pub const INVALID_INPUTS_MESSAGE: &str = "Please enter valid inputs.";

/// Measurement field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Weight,
    Height,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Weight => "weight",
            InputField::Height => "height",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Field was absent or blank
    Missing,
    /// Field could not be read as a decimal number
    NotANumber,
    /// Zero or negative
    NotPositive,
    /// NaN or infinite
    NotFinite,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::Missing => "missing",
            InvalidReason::NotANumber => "not_a_number",
            InvalidReason::NotPositive => "not_positive",
            InvalidReason::NotFinite => "not_finite",
        }
    }
}

/// Rejection of a measurement before any BMI value is computed.
///
/// The user-facing message is the same for every field and reason; the
/// field and reason are kept for logging and API error details.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Please enter valid inputs.")]
pub struct ValidationError {
    pub field: InputField,
    pub reason: InvalidReason,
}

impl ValidationError {
    pub fn new(field: InputField, reason: InvalidReason) -> Self {
        Self { field, reason }
    }

    /// User-facing message
    pub fn message(&self) -> &'static str {
        INVALID_INPUTS_MESSAGE
    }
}
