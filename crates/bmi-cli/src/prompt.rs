//! Prompting the user and reading their answers.

use std::io::{BufRead, Write};

use bmi_common::parse_f64;
use bmi_model::{Field, UnitChoice, parse_uom};
use tracing::{debug, warn};

use crate::error::SessionError;
use crate::input::InputReader;

/// The prompt/response pair: an input source and the text output the
/// prompts and messages go to.
///
/// The input reader is owned for the whole session and released when the
/// console is dropped, whichever way the session ends.
pub struct Console<R, W> {
    input: InputReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: InputReader::new(input),
            output,
        }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a full line of text.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes prompt text without a line break and flushes it to the user.
    fn ask(&mut self, prompt_text: &str) -> Result<(), SessionError> {
        write!(self.output, "{prompt_text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts once for a unit of measure.
    ///
    /// An empty answer selects `default`. An answer naming no unit is
    /// answered with the list of allowed values and yields
    /// [`UnitChoice::Unknown`]; the caller decides whether to ask again.
    pub fn prompt_uom(
        &mut self,
        prompt_text: &str,
        default: UnitChoice,
    ) -> Result<UnitChoice, SessionError> {
        self.ask(prompt_text)?;
        let line = self
            .input
            .read_line()?
            .ok_or(SessionError::InputExhausted {
                expected: "a unit of measure",
            })?;
        let answer = line.trim();
        if answer.is_empty() {
            debug!(default = %default, "empty unit answer, using default");
            return Ok(default);
        }
        match parse_uom(answer) {
            Ok(choice) => Ok(choice),
            Err(unrecognized) => {
                warn!(input = %unrecognized.input, "unrecognized unit of measure");
                self.say(&unrecognized.to_string())?;
                Ok(UnitChoice::Unknown)
            }
        }
    }

    /// Prompts once for a unit of measure, with the sentinel as the default.
    pub fn prompt_uom_or_unknown(&mut self, prompt_text: &str) -> Result<UnitChoice, SessionError> {
        self.prompt_uom(prompt_text, UnitChoice::Unknown)
    }

    /// Prompts for a decimal number. Anything unparseable is fatal.
    pub fn prompt_number(&mut self, prompt_text: &str, field: Field) -> Result<f64, SessionError> {
        self.ask(prompt_text)?;
        let token = self
            .input
            .next_token()?
            .ok_or(SessionError::InputExhausted {
                expected: field.as_str(),
            })?;
        parse_f64(&token).ok_or(SessionError::InvalidNumber { field, token })
    }
}
