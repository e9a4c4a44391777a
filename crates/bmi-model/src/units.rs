//! Unit-of-measure choices.
//!
//! [`UnitChoice`] is what the user can answer at the unit prompt, including
//! the [`UnitChoice::Unknown`] sentinel. [`MeasurementSystem`] is the subset
//! that measurements can actually be entered in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::BmiError;
use crate::measurements::Measurements;

/// Answer to the unit-of-measure prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitChoice {
    /// Centimeters and kilograms.
    Metric,
    /// Inches and pounds.
    Imperial,
    /// Sentinel for input that matched no real unit system.
    Unknown,
}

impl UnitChoice {
    /// Every variant, in declaration order.
    pub const ALL: [UnitChoice; 3] = [
        UnitChoice::Metric,
        UnitChoice::Imperial,
        UnitChoice::Unknown,
    ];

    /// Returns the canonical capitalized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitChoice::Metric => "Metric",
            UnitChoice::Imperial => "Imperial",
            UnitChoice::Unknown => "Unknown",
        }
    }

    /// Returns true for the sentinel variant.
    pub fn is_unknown(&self) -> bool {
        matches!(self, UnitChoice::Unknown)
    }
}

impl fmt::Display for UnitChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input that names none of the [`UnitChoice`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Input value {input} is not recognized. Here is a list of allowed values: {allowed}",
    allowed = allowed_values()
)]
pub struct UnrecognizedUnit {
    pub input: String,
}

impl FromStr for UnitChoice {
    type Err = UnrecognizedUnit;

    /// Case-insensitive match against the variant names, including `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        UnitChoice::ALL
            .into_iter()
            .find(|choice| trimmed.eq_ignore_ascii_case(choice.as_str()))
            .ok_or_else(|| UnrecognizedUnit {
                input: trimmed.to_string(),
            })
    }
}

/// Parses a unit-of-measure answer without any I/O.
///
/// # Examples
///
/// ```
/// use bmi_model::{UnitChoice, parse_uom};
///
/// assert_eq!(parse_uom("metric"), Ok(UnitChoice::Metric));
/// assert_eq!(parse_uom(" IMPERIAL "), Ok(UnitChoice::Imperial));
/// assert!(parse_uom("parsecs").is_err());
/// ```
pub fn parse_uom(input: &str) -> Result<UnitChoice, UnrecognizedUnit> {
    input.parse()
}

/// The user-facing list of accepted units, e.g. `{ Metric, Imperial }`.
///
/// Built from [`UnitChoice::ALL`] with the sentinel left out.
pub fn allowed_values() -> String {
    let names: Vec<&str> = UnitChoice::ALL
        .iter()
        .filter(|choice| !choice.is_unknown())
        .map(UnitChoice::as_str)
        .collect();
    format!("{{ {} }}", names.join(", "))
}

/// A unit system measurements can be entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MeasurementSystem {
    /// Converts raw entries in this system to centimeters and kilograms.
    pub fn normalize(self, height: f64, weight: f64) -> Measurements {
        match self {
            MeasurementSystem::Metric => Measurements::new(height, weight),
            MeasurementSystem::Imperial => Measurements::from_imperial(height, weight),
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", UnitChoice::from(*self))
    }
}

impl From<MeasurementSystem> for UnitChoice {
    fn from(system: MeasurementSystem) -> Self {
        match system {
            MeasurementSystem::Metric => UnitChoice::Metric,
            MeasurementSystem::Imperial => UnitChoice::Imperial,
        }
    }
}

impl TryFrom<UnitChoice> for MeasurementSystem {
    type Error = BmiError;

    fn try_from(choice: UnitChoice) -> Result<Self, Self::Error> {
        match choice {
            UnitChoice::Metric => Ok(MeasurementSystem::Metric),
            UnitChoice::Imperial => Ok(MeasurementSystem::Imperial),
            UnitChoice::Unknown => Err(BmiError::UnsupportedUnit(choice)),
        }
    }
}
