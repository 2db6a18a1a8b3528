//! Settings for the HTTP alarm callback runtime
//!
//! Covers the shared HTTP client and the logger. Callback configuration
//! itself (the destination URL) belongs to the host and arrives as a
//! `models::Configuration`.
//!
//! # Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. TOML file (`--config` or `ALARM_CONFIG_FILE`)
//! 3. `ALARM_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpClientSettings, LoggerSettings, Settings};
