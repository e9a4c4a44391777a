use thiserror::Error;

use crate::measurements::Field;
use crate::units::UnitChoice;

/// Fatal errors on the way from a unit choice to a computed BMI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    /// The unit sentinel reached the point where a real system was required.
    #[error("User has specified an unsupported unit of measure: {0}")]
    UnsupportedUnit(UnitChoice),

    /// A normalized measurement fell outside `(0, max]`.
    #[error(
        "Specified input {field} value of {value:?} is outside the allowed range of (0:{max}].",
        max = field.max()
    )]
    OutOfRange { field: Field, value: f64 },
}

pub type Result<T> = std::result::Result<T, BmiError>;
