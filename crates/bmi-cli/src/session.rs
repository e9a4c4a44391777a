//! One full interactive BMI session.
//!
//! Greets the user, settles on a unit system (asking at most twice), reads
//! height and weight, normalizes them to centimeters and kilograms,
//! validates them, then prints the BMI and its category.

use std::io::{BufRead, Write};

use bmi_common::format_one_decimal;
use bmi_model::{BmiError, BmiResult, Field, MeasurementSystem, Measurements, UnitChoice};
use tracing::{debug, info_span};

use crate::error::SessionError;
use crate::logging::redact_measurement;
use crate::prompt::Console;

pub const GREETING: &str =
    "Hello!  This program will calculate your BMI based upon your height/weight.";
pub const UOM_FIRST_PROMPT_TEXT: &str =
    "Would you like to input your measurements in Metric (cm/kg) or Imperial (in/lb)? [Imperial]: ";
pub const UOM_SECOND_PROMPT_TEXT: &str = "Please specify \"Metric\" or \"Imperial\" [Imperial]: ";
pub const HEIGHT_PROMPT_METRIC: &str = "Please specify your height in centimeters: ";
pub const HEIGHT_PROMPT_IMPERIAL: &str = "Please specify your height in inches: ";
pub const WEIGHT_PROMPT_METRIC: &str = "Please specify your weight in kilos: ";
pub const WEIGHT_PROMPT_IMPERIAL: &str = "Please specify your weight in pounds: ";
pub const CALCULATING: &str = "Now calculating your BMI.";

/// Unit system used when the user just presses Enter.
pub const DEFAULT_UNITS: UnitChoice = UnitChoice::Imperial;

/// Outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub system: MeasurementSystem,
    pub measurements: Measurements,
    pub result: BmiResult,
}

/// Runs one session against the given console.
///
/// # Errors
///
/// Fails when the second unit answer is still unrecognized, when a number
/// cannot be parsed, when a measurement is out of range, or when input ends
/// early. Range failures print a one-line notice before returning.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Report, SessionError> {
    let span = info_span!("session");
    let _guard = span.enter();

    console.say(GREETING)?;

    let system = choose_units(console)?;
    debug!(system = %system, "unit system selected");

    let measurements = read_measurements(console, system)?;
    debug!(
        height_cm = %redact_measurement(measurements.height_cm),
        weight_kg = %redact_measurement(measurements.weight_kg),
        "measurements normalized"
    );

    if let Err(error) = measurements.validate() {
        if let BmiError::OutOfRange { field, .. } = &error {
            console.say(&format!("Illegal value entered for {field}."))?;
        }
        return Err(error.into());
    }

    console.say(CALCULATING)?;
    let result = BmiResult::from_measurements(&measurements);
    debug!(
        bmi = %redact_measurement(result.bmi),
        category = %result.category,
        "bmi computed"
    );

    print_result(console, &measurements, &result)?;

    Ok(Report {
        system,
        measurements,
        result,
    })
}

/// Asks for the unit system, re-asking once after an unrecognized answer.
fn choose_units<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MeasurementSystem, SessionError> {
    let mut choice = console.prompt_uom(UOM_FIRST_PROMPT_TEXT, DEFAULT_UNITS)?;
    if choice.is_unknown() {
        choice = console.prompt_uom(UOM_SECOND_PROMPT_TEXT, DEFAULT_UNITS)?;
    }
    Ok(MeasurementSystem::try_from(choice)?)
}

fn read_measurements<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    system: MeasurementSystem,
) -> Result<Measurements, SessionError> {
    let (height_prompt, weight_prompt) = match system {
        MeasurementSystem::Metric => (HEIGHT_PROMPT_METRIC, WEIGHT_PROMPT_METRIC),
        MeasurementSystem::Imperial => (HEIGHT_PROMPT_IMPERIAL, WEIGHT_PROMPT_IMPERIAL),
    };
    let height = console.prompt_number(height_prompt, Field::Height)?;
    let weight = console.prompt_number(weight_prompt, Field::Weight)?;
    Ok(system.normalize(height, weight))
}

fn print_result<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    measurements: &Measurements,
    result: &BmiResult,
) -> Result<(), SessionError> {
    console.say(&format!(
        "Height: {}cm",
        format_one_decimal(measurements.height_cm)
    ))?;
    console.say(&format!(
        "Weight: {}kg",
        format_one_decimal(measurements.weight_kg)
    ))?;
    console.say(&format!("BMI:    {}", format_one_decimal(result.bmi)))?;
    console.say(&format!("You are: {}", result.category))?;
    Ok(())
}
