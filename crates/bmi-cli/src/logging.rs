//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Standard output belongs to the interactive prompts, so diagnostics are
//! written to stderr or, when configured, appended to a log file.
//!
//! # Log Levels
//!
//! - `error`: the session failed
//! - `warn`: unrecognized answers, ignored arguments (default)
//! - `debug`: unit selection, normalized measurements, computed category
//! - `trace`: unused
//!
//! Height, weight and BMI values are personal health data. They appear in
//! logs only when `--log-data` is given; otherwise they are redacted.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result, anyhow};
use bmi_common::format_one_decimal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when measurement logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if measurement values may be logged.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Formats a measurement for logging, or redacts it.
pub fn redact_measurement(value: f64) -> String {
    if log_data_enabled() {
        format_one_decimal(value)
    } else {
        REDACTED_VALUE.to_string()
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level emitted by this workspace's crates.
    pub level_filter: LevelFilter,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
    /// Whether measurement values may be logged.
    pub log_data: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human-readable format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Installs the global tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            init_logging_with_writer(config, Mutex::new(file))
        }
        None => init_logging_with_writer(config, std::io::stderr),
    }
}

/// Installs the global subscriber with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    let filter = EnvFilter::new(filter_directives(config.level_filter));

    tracing_subscriber::registry()
        .with(fmt_layer(config, writer))
        .with(filter)
        .try_init()
        .map_err(|error| anyhow!("install tracing subscriber: {error}"))
}

fn fmt_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .boxed(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    }
}

/// Filter directives: our crates at `level`, anything else no louder than warn.
fn filter_directives(level: LevelFilter) -> String {
    let level_str = level.to_string().to_lowercase();
    let external = level.min(LevelFilter::WARN).to_string().to_lowercase();
    format!(
        "{external},bmi_checker={level},bmi_cli={level},bmi_model={level}",
        level = level_str
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet_on_success() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.log_file.is_none());
        assert!(!config.log_data);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn directives_cap_external_crates() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "warn,bmi_checker=debug,bmi_cli=debug,bmi_model=debug"
        );
        assert_eq!(
            filter_directives(LevelFilter::ERROR),
            "error,bmi_checker=error,bmi_cli=error,bmi_model=error"
        );
    }

    #[test]
    fn measurements_redacted_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_measurement(177.8), REDACTED_VALUE);
    }

    #[test]
    fn builder_sets_fields() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::TRACE)
            .with_format(LogFormat::Json)
            .with_ansi(false)
            .with_timestamps(true)
            .with_target(true)
            .with_log_file(Some(PathBuf::from("bmi.log")))
            .with_log_data(true);
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.log_file, Some(PathBuf::from("bmi.log")));
        assert!(config.log_data);
    }
}
