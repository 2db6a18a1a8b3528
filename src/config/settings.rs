//! Settings structures for the shared HTTP transport and the logger
//!
//! These can be loaded from a TOML file and `ALARM_*` environment variables.
//! Every field has a default, so an empty document is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_pool_idle_timeout_seconds() -> u64 {
    90
}

fn default_pool_max_idle_per_host() -> usize {
    10
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// HTTP client settings
// ============================================================================

/// Settings for the shared HTTP client used by alarm callbacks
///
/// Timeouts live here rather than on the callback: the callback performs a
/// single attempt and relies on the client to give up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientSettings {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// How long an idle pooled connection is kept, in seconds
    #[serde(default = "default_pool_idle_timeout_seconds")]
    pub pool_idle_timeout_seconds: u64,

    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,

    /// User-Agent header sent with every callback request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_seconds)
    }
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            pool_idle_timeout_seconds: default_pool_idle_timeout_seconds(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
            user_agent: default_user_agent(),
        }
    }
}

// ============================================================================
// Logger settings
// ============================================================================

/// Logger settings as they appear in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Filter directive, e.g. `info` or `http_alarm_callback=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// One of `full`, `compact`, `json`
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl LoggerSettings {
    /// Convert to the logger's runtime configuration
    pub fn into_logger_config(self) -> anyhow::Result<LoggerConfig> {
        let format: LogFormat = self.format.parse()?;
        LoggerConfig::new(ConsoleConfig::new(self.colored, format), self.level)
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Root settings
// ============================================================================

/// Root settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpClientSettings,

    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings: Settings = toml_from_str("");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.http.timeout(), Duration::from_secs(30));
        assert_eq!(settings.http.connect_timeout(), Duration::from_secs(10));
        assert!(settings.http.user_agent.starts_with("http-alarm-callback/"));
    }

    #[test]
    fn test_partial_document() {
        let settings: Settings = toml_from_str(
            r#"
            [http]
            timeout_seconds = 5

            [logger]
            format = "json"
            "#,
        );
        assert_eq!(settings.http.timeout_seconds, 5);
        assert_eq!(settings.http.connect_timeout_seconds, 10);
        assert_eq!(settings.logger.format, "json");
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_into_logger_config() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            format: "compact".to_string(),
            colored: false,
        };
        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.console.format, LogFormat::Compact);
        assert!(!config.console.colored);
    }

    #[test]
    fn test_into_logger_config_rejects_unknown_format() {
        let settings = LoggerSettings {
            format: "xml".to_string(),
            ..LoggerSettings::default()
        };
        assert!(settings.into_logger_config().is_err());
    }

    fn toml_from_str(input: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(input, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
