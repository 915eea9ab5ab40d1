//! API request and response types

use crate::errors::{InputField, InvalidReason, ValidationError};
use crate::health_metrics::{BmiReport, BoundaryConvention, ReferenceRow};
use crate::models::{Demographics, MeasurementInput};
use crate::render::RenderVariant;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Result of one evaluation, success or rejection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Ok {
        report: BmiReport,
    },
    Error {
        message: String,
        field: InputField,
        reason: InvalidReason,
    },
}

impl From<Result<BmiReport, ValidationError>> for EvaluationOutcome {
    fn from(result: Result<BmiReport, ValidationError>) -> Self {
        match result {
            Ok(report) => EvaluationOutcome::Ok { report },
            Err(err) => EvaluationOutcome::Error {
                message: err.message().to_string(),
                field: err.field,
                reason: err.reason,
            },
        }
    }
}

/// A form value sent either as a JSON number or as the raw field text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn to_text(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.clone(),
        }
    }
}

/// BMI evaluation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluateBmiRequest {
    #[serde(default)]
    pub weight: Option<NumericInput>,
    #[serde(default)]
    pub height: Option<NumericInput>,
    /// "metric" (default) or "imperial"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<NumericInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl EvaluateBmiRequest {
    /// Convert to evaluator input. Fails only on an unknown unit system;
    /// weight and height are validated by the evaluator.
    pub fn to_input(&self) -> Result<MeasurementInput, String> {
        let unit_system = match self.unit_system.as_deref() {
            Some(raw) => raw.parse::<UnitSystem>()?,
            None => UnitSystem::default(),
        };
        let age = self.age.as_ref().map(NumericInput::to_text);

        Ok(MeasurementInput {
            weight: self.weight.as_ref().map(NumericInput::to_text),
            height: self.height.as_ref().map(NumericInput::to_text),
            unit_system,
            demographics: Demographics::from_form(age.as_deref(), self.gender.as_deref()),
        })
    }
}

/// Reference table response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTableResponse {
    pub convention: BoundaryConvention,
    pub rows: Vec<ReferenceRow>,
}

/// Scale position query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleQuery {
    pub value: f64,
}

/// Scale position response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleResponse {
    pub value: f64,
    pub position: f64,
}

/// Render request: a measurement plus view options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderBmiRequest {
    #[serde(flatten)]
    pub measurement: EvaluateBmiRequest,
    #[serde(default)]
    pub variant: RenderVariant,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub show_table: bool,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
