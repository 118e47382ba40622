//! File-based tracing setup
//!
//! The TUI owns the terminal, so log output only ever goes to a file. When no
//! file is configured no subscriber is installed and `tracing` macros are
//! no-ops.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::error::{Result, TicketError};

/// Environment variable naming the log file (overrides `log.file`)
pub const LOG_FILE_ENV: &str = "TICKETDESK_LOG";

/// Environment variable holding the filter directive (overrides `log.level`)
pub const LOG_LEVEL_ENV: &str = "TICKETDESK_LOG_LEVEL";

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file: PathBuf,
    pub directive: Option<String>,
}

/// Combine environment overrides with the config file's log section
///
/// Returns `None` when logging is disabled.
pub fn resolve_log_settings(
    config: &LogConfig,
    env_file: Option<String>,
    env_level: Option<String>,
) -> Option<LogSettings> {
    let file = env_file
        .filter(|f| !f.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())?;
    let directive = env_level
        .filter(|l| !l.is_empty())
        .or_else(|| config.level.clone());
    Some(LogSettings { file, directive })
}

/// Install the global subscriber if a log file is configured
///
/// Returns whether logging was enabled.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let Some(settings) = resolve_log_settings(
        config,
        env::var(LOG_FILE_ENV).ok(),
        env::var(LOG_LEVEL_ENV).ok(),
    ) else {
        return Ok(false);
    };

    let filter = match &settings.directive {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| TicketError::Config(format!("invalid log level '{directive}': {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TicketError::Other(format!("failed to initialize logging: {e}")))?;

    tracing::info!(file = %settings.file.display(), "logging initialized");
    Ok(true)
}
