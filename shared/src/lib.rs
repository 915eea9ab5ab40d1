//! BMI Calculator Shared Library
//!
//! This crate contains the BMI evaluator together with the view state,
//! renderers and API types used by the backend and WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod render;
pub mod types;
pub mod units;
pub mod validation;
pub mod view;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
pub use units::*;

pub use models::{Demographics, Gender, MeasurementInput};
pub use render::{Palette, RenderVariant, Renderer};
pub use view::{FormFields, ViewAction, ViewState};
