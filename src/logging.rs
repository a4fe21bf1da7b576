//! Logging System
//!
//! Two layers: a [`Logger`] that gates messages by the crawler's verbosity level
//! and hands admitted records to a [`LogSink`], and a `tracing` subscriber that
//! the binary installs as the transport for [`TracingSink`].

use crate::error::ConfigError;
use clap::ValueEnum;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Target used for messages emitted through [`Logger::force`].
pub const FORCED_TARGET: &str = "axe_crawler::forced";

/// Crawler verbosity, ordered from least to most chatty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only forced messages
    Quiet,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }

    /// Whether a message of `severity` passes this verbosity.
    pub fn admits(&self, severity: Severity) -> bool {
        let threshold = match self {
            Verbosity::Quiet => return false,
            Verbosity::Error => Severity::Error,
            Verbosity::Warn => Severity::Warn,
            Verbosity::Info => Severity::Info,
            Verbosity::Debug => Severity::Debug,
        };
        severity <= threshold
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a single log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
}

/// A message that made it past the verbosity gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    /// Emitted via [`Logger::force`], bypassing verbosity
    pub forced: bool,
    pub message: String,
}

/// Destination for admitted log records.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &LogRecord);
}

/// Forwards records to `tracing`. Forced records go to [`FORCED_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &LogRecord) {
        if record.forced {
            info!(target: FORCED_TARGET, "{}", record.message);
            return;
        }
        match record.severity {
            Severity::Error => error!("{}", record.message),
            Severity::Warn => warn!("{}", record.message),
            Severity::Info => info!("{}", record.message),
            Severity::Debug => debug!("{}", record.message),
        }
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}

/// Verbosity-bound logger handed to the crawler with its configuration.
#[derive(Clone)]
pub struct Logger {
    verbosity: Verbosity,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger writing through `tracing`.
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_sink(verbosity, Arc::new(TracingSink))
    }

    pub fn with_sink(verbosity: Verbosity, sink: Arc<dyn LogSink>) -> Self {
        Self { verbosity, sink }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Same sink, different level.
    pub fn rebind(&self, verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            sink: Arc::clone(&self.sink),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    /// Emit regardless of verbosity, `quiet` included.
    pub fn force(&self, message: impl Into<String>) {
        self.sink.write(&LogRecord {
            severity: Severity::Info,
            forced: true,
            message: message.into(),
        });
    }

    fn log(&self, severity: Severity, message: impl Into<String>) {
        if self.verbosity.admits(severity) {
            self.sink.write(&LogRecord {
                severity,
                forced: false,
                message: message.into(),
            });
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Subscriber configuration for the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format: json, text (default: text)
    #[serde(default)]
    pub format: LogFormat,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            color: default_true(),
        }
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (AXE_CRAWLER_LOG, AXE_CRAWLER_LOG_FORMAT)
/// 2. The given config
///
/// Verbosity is enforced by [`Logger`], so the default filter lets all crate
/// events through.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = build_env_filter()?;
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    let result = match format {
        LogFormat::Json => base_subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn build_env_filter() -> Result<EnvFilter, ConfigError> {
    let filter = EnvFilter::try_from_env("AXE_CRAWLER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("axe_crawler=trace"));

    // Forced messages must survive any user filter.
    let forced = format!("{}=info", FORCED_TARGET);
    let directive = forced
        .parse::<Directive>()
        .map_err(|e| ConfigError::Logging(format!("Invalid log directive: {}", e)))?;
    Ok(filter.add_directive(directive))
}

fn determine_format(config: &LoggingConfig) -> Result<LogFormat, ConfigError> {
    match std::env::var("AXE_CRAWLER_LOG_FORMAT") {
        Ok(value) => parse_log_format(&value),
        Err(_) => Ok(config.format),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}
