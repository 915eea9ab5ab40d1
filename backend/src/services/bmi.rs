//! BMI evaluation service
//!
//! Translates API requests into evaluator input, runs the evaluator and
//! logs the outcome. Holds no state of its own.

use crate::error::{ApiError, ApiResult};
use bmi_calculator_shared::{
    scale_position, BmiReport, EvaluateBmiRequest, Evaluator, MeasurementInput, Palette,
    ReferenceTableResponse, RenderBmiRequest, ScaleResponse, ViewAction, ViewState,
};
use tracing::{debug, info};

pub struct BmiService;

impl BmiService {
    fn to_input(request: &EvaluateBmiRequest) -> ApiResult<MeasurementInput> {
        request.to_input().map_err(ApiError::BadRequest)
    }

    /// Evaluate a measurement into a full report
    pub fn evaluate(evaluator: &Evaluator, request: &EvaluateBmiRequest) -> ApiResult<BmiReport> {
        let input = Self::to_input(request)?;

        match evaluator.evaluate_input(&input) {
            Ok(report) => {
                info!(
                    unit_system = %report.unit_system,
                    bmi = report.value,
                    category = %report.category,
                    "BMI evaluated"
                );
                Ok(report)
            }
            Err(err) => {
                debug!(field = %err.field, reason = err.reason.as_str(), "Measurement rejected");
                Err(err.into())
            }
        }
    }

    /// Reference table under the evaluator's convention
    pub fn reference_table(evaluator: &Evaluator) -> ReferenceTableResponse {
        ReferenceTableResponse {
            convention: evaluator.convention,
            rows: evaluator.reference_table(),
        }
    }

    /// Scale marker position for a BMI value
    pub fn scale(value: f64) -> ApiResult<ScaleResponse> {
        if !value.is_finite() {
            return Err(ApiError::BadRequest("value must be a finite number".to_string()));
        }
        Ok(ScaleResponse {
            value,
            position: scale_position(value),
        })
    }

    /// Build the view state a user would reach by filling in the form and
    /// pressing Calculate, then render it as plain text.
    ///
    /// Validation failures are part of the rendered view, not API errors.
    pub fn render(evaluator: &Evaluator, request: &RenderBmiRequest) -> ApiResult<String> {
        let input = Self::to_input(&request.measurement)?;
        let demographics = input.demographics;

        let mut actions = vec![
            ViewAction::SetUnitSystem(input.unit_system),
            ViewAction::SetWeight(input.weight.unwrap_or_default()),
            ViewAction::SetHeight(input.height.unwrap_or_default()),
        ];
        if let Some(age) = demographics.age {
            actions.push(ViewAction::SetAge(age.to_string()));
        }
        if let Some(gender) = demographics.gender {
            actions.push(ViewAction::SetGender(gender.to_string()));
        }
        if request.dark_mode {
            actions.push(ViewAction::ToggleDarkMode);
        }
        if request.show_table {
            actions.push(ViewAction::ToggleReferenceTable);
        }
        actions.push(ViewAction::Calculate);

        let state = ViewState::default().apply_all(actions, evaluator);
        debug!(variant = ?request.variant, dark_mode = state.dark_mode, "Rendering BMI view");

        let renderer = request.variant.renderer(evaluator.convention);
        Ok(renderer.render(&state, &Palette::for_state(&state, false)))
    }
}
