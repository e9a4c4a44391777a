//! BMI checker CLI.

use std::io::{self, IsTerminal};

use bmi_cli::logging::{LogConfig, LogFormat, init_logging};
use bmi_cli::{Console, Report, SessionError, run_session};
use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, warn};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let (cli, ignored) = parse_cli();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }
    if let Some(reason) = ignored {
        warn!(reason = %reason, "ignoring command-line arguments");
    }
    let exit_code = match run() {
        Ok(report) => {
            debug!(
                system = %report.system,
                category = %report.result.category,
                "session complete"
            );
            0
        }
        Err(error) => {
            error!(error = %error, "session failed");
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Runs a session on the process's standard streams.
///
/// The stdin lock is dropped when this returns, on success and on error.
fn run() -> Result<Report, SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(&mut console)
}

/// Parses arguments, falling back to defaults for anything unrecognized.
///
/// `--help` and `--version` still print and exit.
fn parse_cli() -> (Cli, Option<String>) {
    match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(error) => {
            let rendered = error.to_string();
            let reason = rendered.lines().next().unwrap_or_default().to_string();
            (Cli::parse_from(["bmi-checker"]), Some(reason))
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["bmi-checker"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.log_data);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn timestamp_and_target_flags_reach_config() {
        let cli = Cli::parse_from(["bmi-checker", "--log-timestamps", "--log-target"]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let cli = Cli::parse_from(["bmi-checker", "-q", "--log-level", "debug", "--log-data"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(config.log_data);
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let cli = Cli::parse_from(["bmi-checker", "-vv", "--log-format", "json"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn unknown_arguments_are_rejected_by_parser() {
        assert!(Cli::try_parse_from(["bmi-checker", "180", "75"]).is_err());
    }
}
