//! The BMI formula and weight categories.

use std::fmt;

use bmi_common::round_to_display;

use crate::measurements::Measurements;

/// Body Mass Index from a height in centimeters and a weight in kilograms.
///
/// No validation is done; callers pass measurements that passed
/// [`Measurements::validate`].
///
/// # Examples
///
/// ```
/// use bmi_model::bmi;
///
/// assert_eq!(bmi(150.0, 90.0), 40.0);
/// ```
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Weight category for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Below 18.5, including zero, negative and NaN values.
    Underweight,
    /// 18.5 up to but excluding 25.
    NormalWeight,
    /// 25 up to but excluding 30.
    Overweight,
    /// 30 and above.
    Obese,
}

impl Category {
    /// Lower bound of each band above [`Category::Underweight`].
    pub const NORMAL_THRESHOLD: f64 = 18.5;
    pub const OVERWEIGHT_THRESHOLD: f64 = 25.0;
    pub const OBESE_THRESHOLD: f64 = 30.0;

    /// Classifies a BMI value. Thresholds belong to the higher band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi >= Self::OBESE_THRESHOLD {
            Category::Obese
        } else if bmi >= Self::OVERWEIGHT_THRESHOLD {
            Category::Overweight
        } else if bmi >= Self::NORMAL_THRESHOLD {
            Category::NormalWeight
        } else {
            Category::Underweight
        }
    }

    /// The label printed to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight (0-18.5)",
            Category::NormalWeight => "Normal Weight (18.5-25)",
            Category::Overweight => "Overweight (25-30)",
            Category::Obese => "Obese (30+)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A computed BMI and its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
}

impl BmiResult {
    /// Computes the BMI and classifies it at display precision, so the
    /// printed value and the printed category always agree.
    pub fn from_measurements(measurements: &Measurements) -> Self {
        let bmi = bmi(measurements.height_cm, measurements.weight_kg);
        Self {
            bmi,
            category: Category::from_bmi(round_to_display(bmi)),
        }
    }
}
