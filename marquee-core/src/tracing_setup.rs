//! Tracing setup for Marquee
//!
//! Provides dual output: console logs at the user's chosen level and a full
//! trace log on disk for the last run.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File name of the per-run debug log.
pub const LOG_FILE_NAME: &str = "marquee-last-run.log";

/// Initialize tracing with dual output: console (user level) + file (full trace)
///
/// `RUST_LOG` overrides `console_level` for the console layer. The file at
/// `{logs_dir}/marquee-last-run.log` is truncated on every start.
///
/// # Errors
///
/// - `std::io::Error` - If the logs directory or file cannot be created
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> std::io::Result<PathBuf> {
    let log_file_path = prepare_log_file(logs_dir)?;
    let log_file = File::create(&log_file_path)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::new("trace"));

    // try_init so a second call (tests, embedding) keeps the first subscriber
    if tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing already initialized, keeping existing subscriber");
        return Ok(log_file_path);
    }

    tracing::info!(
        "Tracing initialized: console={}, debug_file={}",
        console_level,
        log_file_path.display()
    );

    Ok(log_file_path)
}

fn prepare_log_file(logs_dir: Option<&Path>) -> std::io::Result<PathBuf> {
    let logs_path = logs_dir.unwrap_or_else(|| Path::new("logs"));
    create_dir_all(logs_path)?;
    Ok(logs_path.join(LOG_FILE_NAME))
}

/// CLI log levels for user control
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Informational, warning, and error messages
    Info,
    /// Debug, informational, warning, and error messages
    Debug,
    /// All messages including detailed tracing
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogLevel::Error => write!(f, "error"),
            CliLogLevel::Warn => write!(f, "warn"),
            CliLogLevel::Info => write!(f, "info"),
            CliLogLevel::Debug => write!(f, "debug"),
            CliLogLevel::Trace => write!(f, "trace"),
        }
    }
}
