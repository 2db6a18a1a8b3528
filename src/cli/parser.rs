//! CLI argument parsing with clap
//!
//! This module defines the command-line interface of `alarmctl`, the
//! operator tool for describing, validating and test-firing the HTTP alarm
//! callback.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Operate the HTTP alarm callback from the command line
#[derive(Parser, Debug)]
#[command(name = "alarmctl")]
#[command(version)]
#[command(about = "Describe, validate and test-fire the HTTP alarm callback")]
#[command(long_about = "
alarmctl drives the HTTP alarm callback the same way an alerting host does.
It prints the configuration the callback requires, validates a destination
URL, and sends a sample alert to check that an endpoint accepts deliveries.

EXAMPLES:
    # Show the fields a host must collect
    alarmctl describe

    # Check a destination URL without sending anything
    alarmctl validate --url https://example.org/alerts

    # Send one sample alert
    alarmctl test --url https://example.org/alerts

    # Use a settings file with custom timeouts
    alarmctl --config /etc/alarm/alarm.toml test --url https://example.org/alerts
")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path
    ///
    /// TOML file with `[http]` and `[logger]` sections. Falls back to
    /// `ALARM_CONFIG_FILE`; values can be overridden with `ALARM_*`
    /// environment variables.
    ///
    /// Example: --config /etc/alarm/alarm.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the configuration fields the callback requires, as JSON
    Describe,

    /// Validate a destination URL
    ///
    /// Exit code 0 when the URL would be accepted, 1 otherwise. No network
    /// access.
    Validate {
        /// Destination URL to check
        #[arg(long, value_name = "URL")]
        url: String,
    },

    /// Deliver one sample alert to a destination URL
    ///
    /// Prints the delivery outcome as JSON. Exit code 1 when delivery fails.
    Test {
        /// Destination URL
        #[arg(long, value_name = "URL")]
        url: String,

        /// Title of the sample stream
        #[arg(long, value_name = "TITLE", default_value = "alarmctl test stream")]
        stream_title: String,

        /// Pretty-print the request body
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Log level implied by --verbose / --quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe() {
        let cli = Cli::try_parse_from(["alarmctl", "describe"]).unwrap();
        assert!(matches!(cli.command, Commands::Describe));
        assert_eq!(cli.log_level_override(), None);
    }

    #[test]
    fn test_parse_test_with_defaults() {
        let cli = Cli::try_parse_from([
            "alarmctl",
            "-v",
            "test",
            "--url",
            "https://example.org/alerts",
        ])
        .unwrap();

        match cli.command {
            Commands::Test {
                ref url,
                ref stream_title,
                pretty,
            } => {
                assert_eq!(url, "https://example.org/alerts");
                assert_eq!(stream_title, "alarmctl test stream");
                assert!(!pretty);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_level_override(), Some("debug"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["alarmctl", "-v", "-q", "describe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_url() {
        assert!(Cli::try_parse_from(["alarmctl", "validate"]).is_err());
    }
}
