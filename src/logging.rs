//! Logging bootstrap for embedders.
//!
//! The library itself only emits `tracing` events; hosts that want output
//! call [`init_logging`] once at startup.

use color_eyre::eyre::Result;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Log filename used by the store.
pub const LOG_FILENAME: &str = "centy-content.log";

/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory where log files will be written.
    pub log_dir: PathBuf,
    /// Default log level when RUST_LOG is not set.
    pub log_level: Level,
    /// Whether to use JSON format for logs.
    pub json_format: bool,
    /// Log rotation period.
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".centy-content")
            .join("logs");

        Self {
            log_dir,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// Env filter honoring RUST_LOG, defaulting to the configured level for this
/// crate.
fn env_filter_or(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("centy_content={level}")))
}

/// Initialize the logging system with the given configuration.
///
/// Sets up dual output to both files and stdout, with runtime log level
/// configuration via the RUST_LOG environment variable, JSON or
/// human-readable format, and log file rotation.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender = RollingFileAppender::new(config.rotation, &config.log_dir, LOG_FILENAME);

    if config.json_format {
        // JSON format for production/log aggregation
        let json_file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter_or(config.log_level));

        let json_stdout_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter_or(config.log_level));

        tracing_subscriber::registry()
            .with(json_file_layer)
            .with(json_stdout_layer)
            .with(ErrorLayer::default())
            .init();
    } else {
        // Human-readable format for development
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false) // No ANSI colors in files
            .with_filter(env_filter_or(config.log_level));

        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true)
            .with_filter(env_filter_or(config.log_level));

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stdout_layer)
            .with(ErrorLayer::default())
            .init();
    }

    Ok(())
}

/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, Level::INFO);
        assert!(!config.json_format);
        assert!(config.log_dir.ends_with("logs"));
    }

    #[test]
    fn test_parse_rotation_unknown_defaults_to_daily() {
        let rotation = format!("{:?}", parse_rotation("weekly"));
        let daily = format!("{:?}", parse_rotation("daily"));
        assert_eq!(rotation, daily);
    }

    #[test]
    fn test_parse_rotation_case_insensitive() {
        let hourly = format!("{:?}", parse_rotation("HOURLY"));
        assert_eq!(hourly, format!("{:?}", parse_rotation("hourly")));
    }

    #[test]
    fn test_log_filename_constant() {
        assert_eq!(LOG_FILENAME, "centy-content.log");
    }
}
