//! Settings loader
//!
//! This module provides the `ConfigLoader` struct that merges settings from
//! built-in defaults, an optional TOML file and environment variables.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "ALARM_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "ALARM";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Settings loader
///
/// Sources, in order of priority (lowest first):
/// 1. Defaults baked into `Settings`
/// 2. The configuration file, if one was given
/// 3. `ALARM_*` environment variables
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads `ALARM_CONFIG_FILE` to locate the file
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Use an explicit configuration file, overriding `ALARM_CONFIG_FILE`
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load and validate settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configured file does not exist
    /// - parsing or deserialization fails
    /// - validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(ConfigError::Shape)?;

        settings.validate()?;

        tracing::debug!(
            file = ?self.config_file(),
            timeout_seconds = settings.http.timeout_seconds,
            "Settings loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref path) => Self::add_file_source(builder, path)?,
            None => builder,
        };

        // ALARM_HTTP__TIMEOUT_SECONDS -> http.timeout_seconds
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(true),
        ))
    }
}
