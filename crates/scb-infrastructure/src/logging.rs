//! Structured logging with tracing
//!
//! Configures the global subscriber: level filter, human or JSON output on
//! stderr (stdout carries command output), and an optional daily rolling
//! file.

use crate::constants::{LOG_ENV_VAR, LOG_FILE_PREFIX};
use crate::error_ext::ErrorContext;
use scb_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;

pub use crate::config::LoggingConfig;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| OsStr::new(LOG_FILE_PREFIX)),
        )
    });

    // Layer types differ per format so each branch builds its own stack
    if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry
                .with(stderr)
                .with(file)
                .try_init()
                .context("Failed to initialize logging")?;
        } else {
            registry
                .with(stderr)
                .try_init()
                .context("Failed to initialize logging")?;
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry
                .with(stderr)
                .with(file)
                .try_init()
                .context("Failed to initialize logging")?;
        } else {
            registry
                .with(stderr)
                .try_init()
                .context("Failed to initialize logging")?;
        }
    }

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Log health check result
pub fn log_health_check(component: &str, healthy: bool, details: Option<&str>) {
    if healthy {
        debug!(component = component, "Health check passed");
    } else {
        error!(
            component = component,
            details = details.unwrap_or("Unknown failure"),
            "Health check failed"
        );
    }
}
