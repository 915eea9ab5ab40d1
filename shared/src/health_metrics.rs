//! BMI evaluation
//!
//! Converts a validated measurement into a rounded BMI value and a weight
//! category, plus the display helpers the result views need (health tip,
//! scale marker position, healthy weight range, reference table).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no I/O, no shared state; same input, same output
//! 2. **Round First**: categories are assigned from the value rounded to one
//!    decimal place, the same value that is displayed
//! 3. **Explicit Boundaries**: category cut-offs come from a named
//!    [`BoundaryConvention`] rather than being implied

use crate::errors::{InputField, InvalidReason, ValidationError};
use crate::models::{Demographics, MeasurementInput};
use crate::units::UnitSystem;
use crate::validation::{parse_positive, validate_positive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier for BMI from pounds and inches
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Lower bound of the Normal category under every convention
pub const UNDERWEIGHT_UPPER: f64 = 18.5;

// ============================================================================
// Boundary Conventions
// ============================================================================

/// Upper bounds used for the Normal and Overweight categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryConvention {
    /// WHO table: Normal below 25.0, Overweight below 30.0
    #[default]
    Standard,
    /// Normal below 24.9, Overweight below 29.9. Places 24.9 and 29.9
    /// one category higher than the WHO table.
    Legacy,
}

impl BoundaryConvention {
    /// Exclusive upper bound of the Normal category
    pub fn normal_upper(&self) -> f64 {
        match self {
            BoundaryConvention::Standard => 25.0,
            BoundaryConvention::Legacy => 24.9,
        }
    }

    /// Exclusive upper bound of the Overweight category
    pub fn overweight_upper(&self) -> f64 {
        match self {
            BoundaryConvention::Standard => 30.0,
            BoundaryConvention::Legacy => 29.9,
        }
    }
}

impl fmt::Display for BoundaryConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryConvention::Standard => f.write_str("standard"),
            BoundaryConvention::Legacy => f.write_str("legacy"),
        }
    }
}

impl std::str::FromStr for BoundaryConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "who" => Ok(BoundaryConvention::Standard),
            "legacy" => Ok(BoundaryConvention::Legacy),
            _ => Err(format!("Unknown boundary convention: {}", s)),
        }
    }
}

// ============================================================================
// BMI Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Advice shown under the result
    pub fn health_tip(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "You're underweight. Consider a nutritious, calorie-rich diet."
            }
            BmiCategory::Normal => "Great job! You're maintaining a healthy weight.",
            BmiCategory::Overweight => {
                "You are slightly overweight. Consider regular exercise and a balanced diet."
            }
            BmiCategory::Obese => {
                "BMI is in the obese range. Consider consulting a healthcare provider."
            }
        }
    }

    /// Half-open BMI range `[min, max)` for this category.
    /// `max` is `None` for the open-ended top category.
    pub fn range(&self, convention: BoundaryConvention) -> (f64, Option<f64>) {
        match self {
            BmiCategory::Underweight => (0.0, Some(UNDERWEIGHT_UPPER)),
            BmiCategory::Normal => (UNDERWEIGHT_UPPER, Some(convention.normal_upper())),
            BmiCategory::Overweight => {
                (convention.normal_upper(), Some(convention.overweight_upper()))
            }
            BmiCategory::Obese => (convention.overweight_upper(), None),
        }
    }

    /// Range as printed in the reference table, in one-decimal steps
    pub fn range_label(&self, convention: BoundaryConvention) -> String {
        match self.range(convention) {
            (_, Some(max)) if *self == BmiCategory::Underweight => format!("Below {:.1}", max),
            (min, Some(max)) => format!("{:.1} – {:.1}", min, round_to_tenth(max - 0.1)),
            (min, None) => format!("{:.1} and above", min),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Validated measurement.
///
/// Weight and height are guaranteed strictly positive and finite; the only
/// way to obtain one is through [`Measurement::new`] or
/// [`Measurement::from_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight: f64,
    height: f64,
    unit_system: UnitSystem,
}

impl Measurement {
    /// Weight in kg or lbs, height in cm or inches, per `unit_system`
    pub fn new(weight: f64, height: f64, unit_system: UnitSystem) -> Result<Self, ValidationError> {
        Self {
            weight: validate_positive(InputField::Weight, weight)?,
            height: validate_positive(InputField::Height, height)?,
            unit_system,
        }
        .checked()
    }

    /// Validate raw form text. Weight is checked before height.
    pub fn from_input(input: &MeasurementInput) -> Result<Self, ValidationError> {
        Self {
            weight: parse_positive(InputField::Weight, input.weight.as_deref())?,
            height: parse_positive(InputField::Height, input.height.as_deref())?,
            unit_system: input.unit_system,
        }
        .checked()
    }

    /// Each value can be positive and finite while the pair still overflows
    /// the formula or rounds to a zero BMI. Such a pair is reported against
    /// the weight field.
    fn checked(self) -> Result<Self, ValidationError> {
        let raw = calculate_bmi(self.weight, self.height, self.unit_system);
        if !raw.is_finite() || round_to_tenth(raw) <= 0.0 {
            return Err(ValidationError::new(
                InputField::Weight,
                InvalidReason::NotFinite,
            ));
        }
        if !healthy_weight_range(self.height, self.unit_system).max.is_finite() {
            return Err(ValidationError::new(
                InputField::Height,
                InvalidReason::NotFinite,
            ));
        }
        Ok(self)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// Unrounded BMI
///
/// Metric: weight(kg) / height(m)², with height given in cm.
/// Imperial: weight(lbs) / height(in)² × 703.
pub fn calculate_bmi(weight: f64, height: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Metric => {
            let height_m = height / 100.0;
            weight / (height_m * height_m)
        }
        UnitSystem::Imperial => weight / (height * height) * IMPERIAL_FACTOR,
    }
}

/// Round to one decimal place, halves away from zero
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Classify an already rounded BMI value
pub fn classify_bmi(bmi: f64, convention: BoundaryConvention) -> BmiCategory {
    if bmi < UNDERWEIGHT_UPPER {
        BmiCategory::Underweight
    } else if bmi < convention.normal_upper() {
        BmiCategory::Normal
    } else if bmi < convention.overweight_upper() {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Marker position (0-100) on the four-segment BMI scale.
///
/// Each category occupies a quarter of the bar; the Obese segment spans
/// 30-40 and the marker is pinned at the right edge beyond that.
pub fn scale_position(bmi: f64) -> f64 {
    if bmi.is_nan() || bmi <= 0.0 {
        return 0.0;
    }
    let position = if bmi < 18.5 {
        bmi / 18.5 * 25.0
    } else if bmi < 25.0 {
        25.0 + (bmi - 18.5) / 6.5 * 25.0
    } else if bmi < 30.0 {
        50.0 + (bmi - 25.0) / 5.0 * 25.0
    } else {
        75.0 + (bmi - 30.0) / 10.0 * 25.0
    };
    position.min(100.0)
}

/// Weight interval giving a Normal BMI (18.5-25.0) at the given height,
/// in the measurement's own weight unit.
pub fn healthy_weight_range(height: f64, unit_system: UnitSystem) -> WeightRange {
    let height_sq = match unit_system {
        UnitSystem::Metric => (height / 100.0) * (height / 100.0),
        UnitSystem::Imperial => height * height / IMPERIAL_FACTOR,
    };
    WeightRange {
        min: round_to_tenth(UNDERWEIGHT_UPPER * height_sq),
        max: round_to_tenth(BoundaryConvention::Standard.normal_upper() * height_sq),
        unit: unit_system.weight_unit().abbreviation().to_string(),
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Value as displayed, always with one decimal ("25.0")
    pub fn formatted_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Weight interval with its unit label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

/// Everything a result view shows for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    pub value: f64,
    pub formatted_value: String,
    pub category: BmiCategory,
    pub label: String,
    pub health_tip: String,
    pub scale_position: f64,
    pub healthy_weight_range: WeightRange,
    pub unit_system: UnitSystem,
    pub convention: BoundaryConvention,
    #[serde(default, skip_serializing_if = "Demographics::is_empty")]
    pub demographics: Demographics,
}

impl BmiReport {
    pub fn result(&self) -> BmiResult {
        BmiResult {
            value: self.value,
            category: self.category,
        }
    }
}

/// One row of the BMI reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub category: BmiCategory,
    pub label: String,
    pub range: String,
    pub min: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Reference table rows in ascending order
pub fn reference_table(convention: BoundaryConvention) -> Vec<ReferenceRow> {
    BmiCategory::ALL
        .iter()
        .map(|category| {
            let (min, max) = category.range(convention);
            ReferenceRow {
                category: *category,
                label: category.label().to_string(),
                range: category.range_label(convention),
                min,
                max,
            }
        })
        .collect()
}

// ============================================================================
// Evaluator
// ============================================================================

/// Stateless BMI evaluator, parameterised only by its boundary convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluator {
    pub convention: BoundaryConvention,
}

impl Evaluator {
    pub fn new(convention: BoundaryConvention) -> Self {
        Self { convention }
    }

    /// Compute the rounded BMI and its category
    pub fn evaluate(&self, measurement: &Measurement) -> BmiResult {
        let raw = calculate_bmi(
            measurement.weight,
            measurement.height,
            measurement.unit_system,
        );
        let value = round_to_tenth(raw);
        BmiResult {
            value,
            category: classify_bmi(value, self.convention),
        }
    }

    /// Evaluate a validated measurement into a full report
    pub fn report(&self, measurement: &Measurement, demographics: Demographics) -> BmiReport {
        let result = self.evaluate(measurement);
        BmiReport {
            value: result.value,
            formatted_value: result.formatted_value(),
            category: result.category,
            label: result.category.label().to_string(),
            health_tip: result.category.health_tip().to_string(),
            scale_position: scale_position(result.value),
            healthy_weight_range: healthy_weight_range(
                measurement.height,
                measurement.unit_system,
            ),
            unit_system: measurement.unit_system,
            convention: self.convention,
            demographics,
        }
    }

    /// Validate raw form values and evaluate them
    pub fn evaluate_input(&self, input: &MeasurementInput) -> Result<BmiReport, ValidationError> {
        let measurement = Measurement::from_input(input)?;
        Ok(self.report(&measurement, input.demographics))
    }

    /// Reference table under this evaluator's convention
    pub fn reference_table(&self) -> Vec<ReferenceRow> {
        reference_table(self.convention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn metric(weight: f64, height: f64) -> Measurement {
        Measurement::new(weight, height, UnitSystem::Metric).unwrap()
    }

    fn imperial(weight: f64, height: f64) -> Measurement {
        Measurement::new(weight, height, UnitSystem::Imperial).unwrap()
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_metric_normal() {
        let result = Evaluator::default().evaluate(&metric(70.0, 175.0));
        assert_eq!(result.value, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.formatted_value(), "22.9");
    }

    #[test]
    fn test_metric_underweight() {
        let result = Evaluator::default().evaluate(&metric(45.0, 170.0));
        assert_eq!(result.value, 15.6);
        assert_eq!(result.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_imperial_near_normal_boundary() {
        // 150 lbs at 65 in is 24.9586 raw, which rounds up to 25.0
        let result = Evaluator::default().evaluate(&imperial(150.0, 65.0));
        assert_eq!(result.value, 25.0);
        assert_eq!(result.formatted_value(), "25.0");
        assert_eq!(result.category, BmiCategory::Overweight);

        // 150 lbs at 65.1 in is 24.88 raw
        let result = Evaluator::default().evaluate(&imperial(150.0, 65.1));
        assert_eq!(result.value, 24.9);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_imperial_formula() {
        // 180 lbs at 70 in -> 25.8
        let result = Evaluator::default().evaluate(&imperial(180.0, 70.0));
        assert_eq!(result.value, 25.8);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_half_tenth_rounds_up() {
        // 24.95 is stored just below 24.95, but the scaled value lands on
        // 249.5 exactly and rounds away from zero
        let report = Evaluator::default()
            .evaluate_input(&MeasurementInput::new("24.95", "100", UnitSystem::Metric))
            .unwrap();
        assert_eq!(report.formatted_value, "25.0");
        assert_eq!(report.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_category_uses_rounded_value() {
        // Raw 24.96 rounds to 25.0 and must be classified from 25.0
        let raw = 24.96;
        assert_eq!(classify_bmi(raw, BoundaryConvention::Standard), BmiCategory::Normal);
        assert_eq!(
            classify_bmi(round_to_tenth(raw), BoundaryConvention::Standard),
            BmiCategory::Overweight
        );

        // Raw 24.949 rounds to 24.9
        assert_eq!(round_to_tenth(24.949), 24.9);
        assert_eq!(
            classify_bmi(round_to_tenth(24.949), BoundaryConvention::Standard),
            BmiCategory::Normal
        );
    }

    #[rstest]
    #[case(0.0, BmiCategory::Underweight)]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.9, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    #[case(55.0, BmiCategory::Obese)]
    fn test_standard_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi, BoundaryConvention::Standard), expected);
    }

    #[rstest]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.8, BmiCategory::Normal)]
    #[case(24.9, BmiCategory::Overweight)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.8, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Obese)]
    #[case(30.0, BmiCategory::Obese)]
    fn test_legacy_boundaries(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi, BoundaryConvention::Legacy), expected);
    }

    #[test]
    fn test_legacy_evaluator() {
        let evaluator = Evaluator::new(BoundaryConvention::Legacy);
        let result = evaluator.evaluate(&imperial(150.0, 65.1));
        assert_eq!(result.value, 24.9);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_convention_parsing() {
        assert_eq!("standard".parse::<BoundaryConvention>().unwrap(), BoundaryConvention::Standard);
        assert_eq!("LEGACY".parse::<BoundaryConvention>().unwrap(), BoundaryConvention::Legacy);
        assert!("strict".parse::<BoundaryConvention>().is_err());
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[rstest]
    #[case(Some("0"), Some("170"), InputField::Weight)]
    #[case(Some("70"), Some("0"), InputField::Height)]
    #[case(Some("-5"), Some("170"), InputField::Weight)]
    #[case(Some("70"), Some("abc"), InputField::Height)]
    #[case(Some("70"), None, InputField::Height)]
    #[case(None, Some("170"), InputField::Weight)]
    fn test_invalid_inputs(
        #[case] weight: Option<&str>,
        #[case] height: Option<&str>,
        #[case] field: InputField,
    ) {
        let input = MeasurementInput {
            weight: weight.map(String::from),
            height: height.map(String::from),
            ..Default::default()
        };
        let err = Evaluator::default().evaluate_input(&input).unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.to_string(), "Please enter valid inputs.");
    }

    #[rstest]
    #[case("1e300", "1e-10", UnitSystem::Metric)]
    #[case("1e-300", "1e300", UnitSystem::Metric)]
    #[case("1e308", "0.001", UnitSystem::Imperial)]
    #[case("0.0001", "1000", UnitSystem::Metric)]
    fn test_extreme_pairs_rejected(
        #[case] weight: &str,
        #[case] height: &str,
        #[case] unit_system: UnitSystem,
    ) {
        let input = MeasurementInput::new(weight, height, unit_system);
        let err = Evaluator::default().evaluate_input(&input).unwrap_err();
        assert_eq!(err.field, InputField::Weight);
        assert_eq!(err.reason, InvalidReason::NotFinite);
        assert_eq!(err.to_string(), "Please enter valid inputs.");
    }

    #[test]
    fn test_height_too_large_for_weight_range() {
        // BMI is 1.0 but the healthy range overflows
        let err = Measurement::new(1e308, 1e156, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.field, InputField::Height);
        assert_eq!(err.reason, InvalidReason::NotFinite);
    }

    #[test]
    fn test_smallest_reportable_bmi() {
        // 0.05 rounds up to 0.1, which is still a real result
        let report = Evaluator::default()
            .evaluate_input(&MeasurementInput::new("0.05", "100", UnitSystem::Metric))
            .unwrap();
        assert_eq!(report.formatted_value, "0.1");
        assert_eq!(report.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_measurement_rejects_non_finite() {
        let err = Measurement::new(f64::NAN, 170.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.reason, InvalidReason::NotFinite);
        assert!(Measurement::new(70.0, f64::INFINITY, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_weight_checked_before_height() {
        let input = MeasurementInput {
            weight: Some("0".into()),
            height: Some("abc".into()),
            ..Default::default()
        };
        let err = Measurement::from_input(&input).unwrap_err();
        assert_eq!(err.field, InputField::Weight);
    }

    // =========================================================================
    // Report Tests
    // =========================================================================

    #[test]
    fn test_report_contents() {
        let input = MeasurementInput::new("70", "175", UnitSystem::Metric)
            .with_demographics(Demographics::from_form(Some("30"), Some("male")));
        let report = Evaluator::default().evaluate_input(&input).unwrap();

        assert_eq!(report.formatted_value, "22.9");
        assert_eq!(report.label, "Normal");
        assert_eq!(report.health_tip, "Great job! You're maintaining a healthy weight.");
        assert_eq!(report.unit_system, UnitSystem::Metric);
        assert_eq!(report.demographics.age, Some(30));
        assert_eq!(report.healthy_weight_range.unit, "kg");
        assert_eq!(report.healthy_weight_range.min, 56.7);
        assert_eq!(report.healthy_weight_range.max, 76.6);
        assert!((report.scale_position - (25.0 + (22.9 - 18.5) / 6.5 * 25.0)).abs() < 1e-9);
        assert_eq!(report.result().value, 22.9);
    }

    #[test]
    fn test_healthy_weight_range_imperial() {
        // 65 in: 18.5 * 4225 / 703 = 111.2, 25 * 4225 / 703 = 150.2
        let range = healthy_weight_range(65.0, UnitSystem::Imperial);
        assert_eq!(range.min, 111.2);
        assert_eq!(range.max, 150.2);
        assert_eq!(range.unit, "lbs");
    }

    #[test]
    fn test_reference_table() {
        let rows = reference_table(BoundaryConvention::Standard);
        let labels: Vec<&str> = rows.iter().map(|r| r.range.as_str()).collect();
        assert_eq!(labels, vec!["Below 18.5", "18.5 – 24.9", "25.0 – 29.9", "30.0 and above"]);
        assert_eq!(rows[3].max, None);

        let legacy = reference_table(BoundaryConvention::Legacy);
        assert_eq!(legacy[1].range, "18.5 – 24.8");
        assert_eq!(legacy[2].range, "24.9 – 29.8");
        assert_eq!(legacy[3].range, "29.9 and above");
    }

    #[test]
    fn test_health_tips_are_distinct() {
        let tips: std::collections::HashSet<&str> =
            BmiCategory::ALL.iter().map(|c| c.health_tip()).collect();
        assert_eq!(tips.len(), 4);
    }

    // =========================================================================
    // Scale Position Tests
    // =========================================================================

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-3.0, 0.0)]
    #[case(18.5, 25.0)]
    #[case(25.0, 50.0)]
    #[case(30.0, 75.0)]
    #[case(40.0, 100.0)]
    #[case(60.0, 100.0)]
    fn test_scale_position_anchors(#[case] bmi: f64, #[case] expected: f64) {
        assert!((scale_position(bmi) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_scale_position_nan() {
        assert_eq!(scale_position(f64::NAN), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: metric value matches the rounded formula
        #[test]
        fn prop_metric_formula(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            let result = Evaluator::default().evaluate(&metric(weight, height));
            let expected = round_to_tenth(weight / ((height / 100.0) * (height / 100.0)));
            prop_assert_eq!(result.value, expected);
        }

        /// Property: imperial value matches the rounded formula
        #[test]
        fn prop_imperial_formula(weight in 2.0f64..900.0, height in 20.0f64..100.0) {
            let result = Evaluator::default().evaluate(&imperial(weight, height));
            let expected = round_to_tenth(weight / (height * height) * 703.0);
            prop_assert_eq!(result.value, expected);
        }

        /// Property: evaluation has no hidden state
        #[test]
        fn prop_idempotent(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            let evaluator = Evaluator::default();
            let m = metric(weight, height);
            prop_assert_eq!(evaluator.evaluate(&m), evaluator.evaluate(&m));
        }

        /// Property: exactly one category matches every non-negative value
        #[test]
        fn prop_categories_partition(bmi in 0.0f64..200.0) {
            for convention in [BoundaryConvention::Standard, BoundaryConvention::Legacy] {
                let matching: Vec<BmiCategory> = BmiCategory::ALL
                    .iter()
                    .copied()
                    .filter(|c| {
                        let (min, max) = c.range(convention);
                        bmi >= min && max.map_or(true, |m| bmi < m)
                    })
                    .collect();
                prop_assert_eq!(matching.len(), 1);
                prop_assert_eq!(matching[0], classify_bmi(bmi, convention));
            }
        }

        /// Property: scale marker stays on the bar and never moves left
        #[test]
        fn prop_scale_monotone(a in 0.0f64..80.0, b in 0.0f64..80.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (p_lo, p_hi) = (scale_position(lo), scale_position(hi));
            prop_assert!((0.0..=100.0).contains(&p_lo));
            prop_assert!((0.0..=100.0).contains(&p_hi));
            prop_assert!(p_lo <= p_hi + 1e-9);
        }

        /// Property: heavier weight never lowers BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 40.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(weight1, height, UnitSystem::Metric);
            let bmi2 = calculate_bmi(weight2, height, UnitSystem::Metric);
            prop_assert!(bmi2 > bmi1);
        }
    }
}
