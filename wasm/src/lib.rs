//! BMI Calculator WASM Module
//!
//! WebAssembly bindings so browser front-ends call the same evaluator and
//! view reducer as the backend. Structured values cross the boundary as
//! JSON strings.

use bmi_calculator_shared::{
    classify_bmi, reference_table, scale_position, BoundaryConvention, Evaluator,
    EvaluationOutcome, MeasurementInput, Palette, RenderVariant, UnitSystem, ViewAction,
    ViewState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "status": "error", "message": message }).to_string()
}

/// Evaluate raw form values
///
/// Returns `{"status":"ok","report":{..}}` or
/// `{"status":"error","message":"Please enter valid inputs.",..}`.
#[wasm_bindgen]
pub fn evaluate_bmi(weight: &str, height: &str, unit_system: &str) -> String {
    let unit_system = match unit_system.parse::<UnitSystem>() {
        Ok(u) => u,
        Err(e) => return error_json(&e),
    };
    let input = MeasurementInput::new(weight, height, unit_system);
    let outcome: EvaluationOutcome = Evaluator::default().evaluate_input(&input).into();
    to_json(&outcome)
}

/// Marker position (0-100) on the BMI scale
#[wasm_bindgen]
pub fn bmi_scale_position(value: f64) -> f64 {
    scale_position(value)
}

/// Category label for an already rounded BMI value
#[wasm_bindgen]
pub fn bmi_category(value: f64) -> String {
    classify_bmi(value, BoundaryConvention::Standard)
        .label()
        .to_string()
}

/// Reference table rows as a JSON array
#[wasm_bindgen]
pub fn bmi_reference_table() -> String {
    to_json(&reference_table(BoundaryConvention::Standard))
}

/// Calculator view held on the JS side
#[wasm_bindgen]
pub struct CalculatorView {
    state: ViewState,
    evaluator: Evaluator,
}

#[wasm_bindgen]
impl CalculatorView {
    #[wasm_bindgen(constructor)]
    pub fn new(legacy_boundaries: bool) -> CalculatorView {
        let convention = if legacy_boundaries {
            BoundaryConvention::Legacy
        } else {
            BoundaryConvention::Standard
        };
        CalculatorView {
            state: ViewState::default(),
            evaluator: Evaluator::new(convention),
        }
    }

    /// Apply an action such as `{"type":"set_weight","value":"70"}`.
    /// Returns the new state as JSON, or an error object if the action
    /// could not be read (state unchanged).
    pub fn dispatch(&mut self, action_json: &str) -> String {
        match serde_json::from_str::<ViewAction>(action_json) {
            Ok(action) => {
                self.state = self.state.apply(action, &self.evaluator);
                self.state_json()
            }
            Err(e) => error_json(&format!("Invalid action: {}", e)),
        }
    }

    /// Current state as JSON
    pub fn state_json(&self) -> String {
        to_json(&self.state)
    }

    /// Render the current state with the named variant
    ///
    /// An unknown variant name yields the same error object as `dispatch`.
    pub fn render(&self, variant: &str, color: bool) -> String {
        let variant = match variant.parse::<RenderVariant>() {
            Ok(v) => v,
            Err(e) => return error_json(&e),
        };
        let palette = Palette::for_state(&self.state, color);
        variant
            .renderer(self.evaluator.convention)
            .render(&self.state, &palette)
    }
}
