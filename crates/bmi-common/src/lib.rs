//! Shared utilities for the BMI checker crates.
//!
//! This crate provides the display formatting and lenient decimal parsing
//! used by both the model and the interactive CLI.

pub mod numeric;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{format_one_decimal, parse_f64, round_to_display};
