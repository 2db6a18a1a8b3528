//! CLI module for alarmctl
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Settings loading (CLI args + config file + environment)
//! - Command execution

pub mod executor;
pub mod parser;
pub mod sample;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};
use crate::logger::init_logger;

/// Load settings for the given CLI arguments
///
/// `--config` wins over `ALARM_CONFIG_FILE`.
///
/// # Errors
/// Returns error if loading or validation fails
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match cli.config {
        Some(ref path) => ConfigLoader::default().with_file(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Initialize logger from settings, applying --verbose / --quiet
///
/// # Errors
/// Returns error if logger initialization fails
pub fn init_logger_from_settings(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let mut logger_config = settings.logger.clone().into_logger_config()?;
    if let Some(level) = cli.log_level_override() {
        logger_config = logger_config.with_level(level);
    }
    init_logger(logger_config)
}
