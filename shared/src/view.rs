//! Calculator view state
//!
//! The form is modelled as an immutable [`ViewState`] value. Every user
//! action produces a new state through [`ViewState::apply`]; the evaluator
//! only runs on [`ViewAction::Calculate`] and never sees the view state.

use crate::health_metrics::{BmiReport, Evaluator};
use crate::models::{Demographics, MeasurementInput};
use crate::types::EvaluationOutcome;
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};

/// Text currently in the form fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormFields {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub gender: String,
    pub unit_system: UnitSystem,
}

impl FormFields {
    /// Measurement input as handed to the evaluator
    pub fn to_input(&self) -> MeasurementInput {
        MeasurementInput {
            weight: Some(self.weight.clone()),
            height: Some(self.height.clone()),
            unit_system: self.unit_system,
            demographics: Demographics::from_form(Some(&self.age), Some(&self.gender)),
        }
    }
}

/// User action on the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    SetWeight(String),
    SetHeight(String),
    SetAge(String),
    SetGender(String),
    SetUnitSystem(UnitSystem),
    Calculate,
    ToggleDarkMode,
    ToggleReferenceTable,
    Reset,
}

/// Snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub form: FormFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<EvaluationOutcome>,
    pub dark_mode: bool,
    pub show_table: bool,
}

impl ViewState {
    /// State after `action`. `self` is left untouched.
    pub fn apply(&self, action: ViewAction, evaluator: &Evaluator) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::SetWeight(value) => next.form.weight = value,
            ViewAction::SetHeight(value) => next.form.height = value,
            ViewAction::SetAge(value) => next.form.age = value,
            ViewAction::SetGender(value) => next.form.gender = value,
            ViewAction::SetUnitSystem(unit_system) => next.form.unit_system = unit_system,
            ViewAction::Calculate => {
                let outcome = evaluator.evaluate_input(&self.form.to_input()).into();
                next.outcome = Some(outcome);
            }
            ViewAction::ToggleDarkMode => next.dark_mode = !self.dark_mode,
            ViewAction::ToggleReferenceTable => next.show_table = !self.show_table,
            ViewAction::Reset => {
                next = ViewState {
                    dark_mode: self.dark_mode,
                    ..ViewState::default()
                }
            }
        }
        next
    }

    /// Fold a sequence of actions from this state
    pub fn apply_all<I>(&self, actions: I, evaluator: &Evaluator) -> ViewState
    where
        I: IntoIterator<Item = ViewAction>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action, evaluator))
    }

    /// Report from the last successful calculation
    pub fn report(&self) -> Option<&BmiReport> {
        match &self.outcome {
            Some(EvaluationOutcome::Ok { report }) => Some(report),
            _ => None,
        }
    }

    /// Message from the last failed calculation
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Some(EvaluationOutcome::Error { message, .. }) => Some(message),
            _ => None,
        }
    }
}
