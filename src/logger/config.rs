//! Configuration types for the logger

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Main logger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    /// Level or full `EnvFilter` directive
    pub level: String,
}

impl LoggerConfig {
    /// Create a new logger configuration with validation
    pub fn new(console: ConsoleConfig, level: impl Into<String>) -> Result<Self> {
        let config = Self {
            console,
            level: level.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.level.contains('=') {
            tracing_subscriber::EnvFilter::try_new(&self.level)
                .with_context(|| format!("Invalid filter directive: {}", self.level))?;
        } else {
            self.parse_level()
                .with_context(|| format!("Invalid log level: {}", self.level))?;
        }
        Ok(())
    }

    /// Parse the log level string into a tracing::Level
    pub fn parse_level(&self) -> Result<Level> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                self.level
            ),
        }
    }

    /// Override the level, e.g. from `--verbose` / `--quiet`
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            level: "info".to_string(),
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub colored: bool,
    pub format: LogFormat,
}

impl ConsoleConfig {
    pub fn new(colored: bool, format: LogFormat) -> Self {
        Self { colored, format }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colored: true,
            format: LogFormat::Full,
        }
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ),
        }
    }
}

impl LogFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}
