//! CLI argument definitions for the BMI checker.
//!
//! The calculator itself takes no arguments; every flag here only shapes
//! diagnostic logging.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bmi-checker",
    version,
    about = "Interactive Body Mass Index calculator",
    long_about = "Asks for your height and weight in metric or imperial units,\n\
                  then prints your BMI and its weight category."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output in logs (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path of each event in logs.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Include height, weight and BMI values in logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
