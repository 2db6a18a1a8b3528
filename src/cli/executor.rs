//! Command executor for dispatching CLI commands

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use jiff::Timestamp;

use super::parser::{Cli, Commands};
use super::sample::{sample_check_result, sample_stream};
use crate::callbacks::{AlarmCallback, CK_URL, HttpAlarmCallback, JsonEncoder, ReqwestTransport};
use crate::config::Settings;
use crate::models::{CallbackOutcome, Configuration};

/// Execute a CLI command, writing its report to `out`
///
/// # Returns
/// `Ok(true)` when the command succeeded, `Ok(false)` when validation or
/// delivery failed (the failure has been reported to `out`).
///
/// # Errors
/// Returns errors for I/O failures writing the report or when the HTTP
/// client cannot be built.
pub async fn execute_command<W: Write>(
    cli: &Cli,
    settings: &Settings,
    out: &mut W,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Describe => {
            let callback = HttpAlarmCallback::with_shared_client();
            let request = callback.describe_required_configuration();
            writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
            Ok(true)
        }
        Commands::Validate { url } => {
            let callback = HttpAlarmCallback::with_shared_client();
            match callback.validate_configuration(&url_configuration(url)) {
                Ok(()) => {
                    writeln!(out, "OK: {} is a valid destination", url)?;
                    Ok(true)
                }
                Err(e) => {
                    writeln!(out, "INVALID: {}", e)?;
                    Ok(false)
                }
            }
        }
        Commands::Test {
            url,
            stream_title,
            pretty,
        } => {
            let encoder = if *pretty {
                JsonEncoder::pretty()
            } else {
                JsonEncoder::new()
            };
            let transport = ReqwestTransport::from_settings(&settings.http)?;
            let mut callback = HttpAlarmCallback::new(Arc::new(transport), Arc::new(encoder));

            if let Err(e) = callback.initialize(url_configuration(url)) {
                writeln!(out, "INVALID: {}", e)?;
                return Ok(false);
            }

            let now = Timestamp::now();
            let stream = sample_stream(stream_title, now);
            let check_result = sample_check_result(now);

            let start = Instant::now();
            let result = callback.deliver(&stream, &check_result).await;
            let outcome = CallbackOutcome::from_result(
                callback.name(),
                &result,
                now,
                start.elapsed().as_millis() as u64,
            );

            writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
            Ok(outcome.is_success())
        }
    }
}

fn url_configuration(url: &str) -> Configuration {
    Configuration::default().with_string(CK_URL, url)
}
