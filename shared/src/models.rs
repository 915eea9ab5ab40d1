//! Form-level data models

use crate::units::UnitSystem;
use crate::validation::parse_age;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Optional metadata collected alongside a measurement.
/// Echoed back with results; never used in the BMI formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl Demographics {
    /// Build from raw form fields, dropping anything unreadable
    pub fn from_form(age: Option<&str>, gender: Option<&str>) -> Self {
        Self {
            age: parse_age(age),
            gender: gender.and_then(|g| g.parse().ok()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.gender.is_none()
    }
}

/// Raw values as typed into the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementInput {
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub demographics: Demographics,
}

impl MeasurementInput {
    pub fn new(weight: impl Into<String>, height: impl Into<String>, unit_system: UnitSystem) -> Self {
        Self {
            weight: Some(weight.into()),
            height: Some(height.into()),
            unit_system,
            demographics: Demographics::default(),
        }
    }

    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_demographics_from_form() {
        let d = Demographics::from_form(Some("34"), Some("female"));
        assert_eq!(d.age, Some(34));
        assert_eq!(d.gender, Some(Gender::Female));
        assert!(!d.is_empty());

        // "Select" placeholder and junk age are treated as not provided
        let d = Demographics::from_form(Some("abc"), Some(""));
        assert!(d.is_empty());
    }

    #[test]
    fn test_measurement_input_builder() {
        let input = MeasurementInput::new("70", "175", UnitSystem::Metric)
            .with_demographics(Demographics { age: Some(30), gender: None });
        assert_eq!(input.weight.as_deref(), Some("70"));
        assert_eq!(input.height.as_deref(), Some("175"));
        assert_eq!(input.demographics.age, Some(30));
    }

    #[test]
    fn test_demographics_serialization_skips_empty() {
        let json = serde_json::to_string(&Demographics::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
