//! Error types for an interactive session.

use std::io;

use bmi_model::{BmiError, Field};
use thiserror::Error;

/// Fatal conditions that end a session with a non-zero exit code.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Unit sentinel reached computation, or a measurement was out of range.
    #[error(transparent)]
    Model(#[from] BmiError),

    /// A numeric prompt received something that is not a decimal number.
    #[error("invalid numeric input \"{token}\" for {field}")]
    InvalidNumber { field: Field, token: String },

    /// Standard input closed before the expected answer arrived.
    #[error("input ended before {expected} was entered")]
    InputExhausted { expected: &'static str },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
