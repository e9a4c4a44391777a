//! Body Mass Index data model.
//!
//! # Module Organization
//!
//! - [`units`]: unit-of-measure choices and their parsing
//! - [`measurements`]: normalization to centimeters/kilograms and range checks
//! - [`bmi`]: the BMI formula and the four weight categories
//! - [`error`]: typed errors for the computation path

pub mod bmi;
pub mod error;
pub mod measurements;
pub mod units;

pub use bmi::{BmiResult, Category, bmi};
pub use error::{BmiError, Result};
pub use measurements::{
    Field, INCHES_TO_CENTIMETERS, MAX_HEIGHT_CENTIMETERS, MAX_WEIGHT_KILOS, Measurements,
    POUNDS_TO_KILOS,
};
pub use units::{MeasurementSystem, UnitChoice, UnrecognizedUnit, allowed_values, parse_uom};
