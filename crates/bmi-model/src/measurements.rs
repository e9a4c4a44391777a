//! Height and weight normalized to centimeters and kilograms.

use std::fmt;

use crate::error::{BmiError, Result};

/// Largest accepted height, in centimeters.
pub const MAX_HEIGHT_CENTIMETERS: u32 = 300;
/// Largest accepted weight, in kilograms.
pub const MAX_WEIGHT_KILOS: u32 = 1000;
pub const INCHES_TO_CENTIMETERS: f64 = 2.54;
pub const POUNDS_TO_KILOS: f64 = 1.0 / 2.205;

/// Which measurement a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }

    /// Inclusive upper bound of the normalized value.
    pub fn max(&self) -> u32 {
        match self {
            Field::Height => MAX_HEIGHT_CENTIMETERS,
            Field::Weight => MAX_WEIGHT_KILOS,
        }
    }

    /// Returns true if `value` lies in `(0, max]`. NaN never does.
    pub fn accepts(&self, value: f64) -> bool {
        value > 0.0 && value <= f64::from(self.max())
    }

    /// Passes `value` through if accepted, otherwise reports it as out of range.
    pub fn check(self, value: f64) -> Result<f64> {
        if self.accepts(value) {
            Ok(value)
        } else {
            Err(BmiError::OutOfRange { field: self, value })
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A height/weight pair in centimeters and kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Converts inches and pounds to the metric pair.
    pub fn from_imperial(height_in: f64, weight_lb: f64) -> Self {
        Self::new(height_in * INCHES_TO_CENTIMETERS, weight_lb * POUNDS_TO_KILOS)
    }

    /// Checks height, then weight, against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`BmiError::OutOfRange`] for the first measurement outside
    /// `(0, max]`.
    pub fn validate(&self) -> Result<()> {
        Field::Height.check(self.height_cm)?;
        Field::Weight.check(self.weight_kg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_conversion() {
        let m = Measurements::from_imperial(70.0, 180.0);
        assert!((m.height_cm - 177.8).abs() < 1e-9);
        assert!((m.weight_kg - 180.0 / 2.205).abs() < 1e-9);
    }

    #[test]
    fn range_bounds() {
        assert!(Field::Height.accepts(300.0));
        assert!(!Field::Height.accepts(300.000_001));
        assert!(!Field::Height.accepts(0.0));
        assert!(!Field::Weight.accepts(-5.0));
        assert!(Field::Weight.accepts(1000.0));
        assert!(!Field::Weight.accepts(f64::NAN));
        assert!(!Field::Weight.accepts(f64::INFINITY));
    }

    #[test]
    fn validate_reports_height_first() {
        let err = Measurements::new(400.0, 0.0).validate().unwrap_err();
        assert_eq!(
            err,
            BmiError::OutOfRange {
                field: Field::Height,
                value: 400.0
            }
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = Field::Height.check(400.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Specified input height value of 400.0 is outside the allowed range of (0:300]."
        );
        let err = Field::Weight.check(-2.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Specified input weight value of -2.5 is outside the allowed range of (0:1000]."
        );
    }

    #[test]
    fn validate_accepts_typical_adult() {
        assert!(Measurements::new(180.0, 75.0).validate().is_ok());
    }
}
