//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The state is immutable after creation; handlers only read it.

use crate::config::AppConfig;
use bmi_calculator_shared::Evaluator;
use std::sync::Arc;

/// Shared application state
///
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `evaluator`: `Copy`, carries only the boundary convention
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Evaluator built from `config.evaluator`
    pub evaluator: Evaluator,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        let evaluator = Evaluator::new(config.evaluator.convention);

        Self {
            config: Arc::new(config),
            evaluator,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the evaluator
    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_calculator_shared::BoundaryConvention;

    #[test]
    fn test_evaluator_follows_config() {
        let mut config = AppConfig::default();
        config.evaluator.convention = BoundaryConvention::Legacy;
        let state = AppState::new(config);
        assert_eq!(state.evaluator().convention, BoundaryConvention::Legacy);
    }

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
