//! Configuration commands
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Print where the configuration is read from

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".cyan().bold());
    println!("{} {}", "file:".dimmed(), Config::config_path().display());
    println!();
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Print the configuration file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path().display());
    Ok(())
}
