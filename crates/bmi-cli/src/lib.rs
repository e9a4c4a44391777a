//! CLI library components for the interactive BMI checker.

pub mod error;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod session;

pub use error::SessionError;
pub use input::InputReader;
pub use prompt::Console;
pub use session::{Report, run_session};
