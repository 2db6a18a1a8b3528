//! Logger setup
//!
//! A console logger based on `tracing-subscriber` with `full`, `compact`
//! and `json` formats. Library code only emits `tracing` events; installing
//! a subscriber is left to the binary or the embedding host.

pub mod config;

#[cfg(test)]
mod tests;

pub use config::*;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger with the given configuration
///
/// # Errors
/// Returns an error if the configuration is invalid or a global subscriber
/// has already been installed.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let use_ansi = config.console.colored && std::io::stderr().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);

    match config.console.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}
