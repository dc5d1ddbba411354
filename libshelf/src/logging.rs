//! Centralized logging configuration
//!
//! Provides logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to stderr or to a file (the TUI owns the terminal, so it logs
//!   to a file or not at all)
//!
//! # Examples
//!
//! ```no_run
//! use libshelf::logging::{LogFormat, LogTarget, LoggingConfig};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), LogTarget::Stderr);
//! config.init().expect("logging already initialized");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Result, ShelfError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Multi-line output for development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to, created if missing
    File(PathBuf),
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub target: LogTarget,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String, target: LogTarget) -> Self {
        Self {
            format,
            level,
            target,
        }
    }

    /// Build from the `[logging]` section, with `SHELF_LOG_FORMAT` and
    /// `SHELF_LOG_LEVEL` taking precedence.
    ///
    /// Returns `None` when no log file is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let file = config.log_file()?;

        let format = std::env::var("SHELF_LOG_FORMAT")
            .ok()
            .or_else(|| Some(config.logging.format.clone()))
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);

        let level =
            std::env::var("SHELF_LOG_LEVEL").unwrap_or_else(|_| config.logging.level.clone());

        Some(Self::new(format, level, LogTarget::File(file)))
    }

    /// Install the global subscriber.
    ///
    /// `RUST_LOG` overrides the configured level. Fails if the log file
    /// cannot be opened or a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let (writer, ansi) = match &self.target {
            LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        ShelfError::Logging(format!(
                            "Failed to open log file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
        };

        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        installed.map_err(|e| ShelfError::Logging(e.to_string()))
    }
}
