//! Settings validation logic

use crate::config::error::ConfigError;
use crate::config::settings::{HttpClientSettings, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl HttpClientSettings {
    /// Validate HTTP client settings
    ///
    /// # Validation Rules
    /// - Request and connect timeouts must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    /// - User agent must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "http.timeout_seconds",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::invalid(
                "http.connect_timeout_seconds",
                "Connect timeout cannot exceed the request timeout.",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::invalid(
                "http.user_agent",
                "User agent cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// The level may be a bare level or a full filter directive; only bare
    /// levels are checked against the known set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !level.contains('=') && !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
