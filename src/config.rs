//! Top-level application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` (or the file named by
//! `TICKETDESK_CONFIG`) and includes:
//! - Whether the tracker starts with the demo tickets
//! - Log file destination and level

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketError};
use crate::types::CONFIG_DIR;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TICKETDESK_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Start with the four demo tickets (default: true)
    #[serde(default = "default_seed_demo_tickets")]
    pub seed_demo_tickets: bool,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "LogConfig::is_default")]
    pub log: LogConfig,
}

fn default_seed_demo_tickets() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_tickets: default_seed_demo_tickets(),
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// File that receives log output; logging is off when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Filter directive such as `info` or `ticketdesk=debug`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LogConfig {
    /// Check if this config is the default (for serialization skip)
    pub fn is_default(&self) -> bool {
        self.file.is_none() && self.level.is_none()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(CONFIG_DIR).join("config.yaml"),
        }
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            TicketError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.log.file
            && file.as_os_str().is_empty()
        {
            return Err(TicketError::Config("log.file must not be empty".to_string()));
        }
        Ok(())
    }
}
