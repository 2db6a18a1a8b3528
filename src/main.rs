use std::process::ExitCode;

use clap::Parser;
use http_alarm_callback::cli::{Cli, execute_command, init_logger_from_settings, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    init_logger_from_settings(&cli, &settings)?;

    tracing::debug!(
        version = http_alarm_callback::pkg_version(),
        "alarmctl starting"
    );

    let mut stdout = std::io::stdout().lock();
    let succeeded = execute_command(&cli, &settings, &mut stdout).await?;

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
