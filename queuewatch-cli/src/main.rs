//! Queuewatch CLI
//!
//! Polls a Jenkins controller once, reports node and build-queue status and
//! publishes the report to SNS when a queued task has waited too long.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{AwsArgs, Config};
use queuewatch_core::RunStatus;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "queuewatch")]
#[command(about = "Jenkins build-queue watchdog", long_about = None)]
struct Cli {
    /// Path to the connections config file
    #[arg(long, env = "QUEUEWATCH_CONFIG", default_value = "./config.json")]
    config: PathBuf,

    /// Echo report lines to stdout as they are recorded
    #[arg(
        long,
        env = "QUEUEWATCH_DEBUG",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    debug: bool,

    /// HTTP timeout in seconds
    #[arg(long, env = "QUEUEWATCH_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    #[command(flatten)]
    aws: AwsArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "queuewatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        config_path: cli.config,
        debug: cli.debug,
        timeout: Duration::from_secs(cli.timeout),
        aws: cli.aws,
    };
    config.validate()?;

    let status = handle_command(cli.command.unwrap_or(Commands::Check), &config).await?;

    Ok(match status {
        RunStatus::Ok => ExitCode::SUCCESS,
        RunStatus::Failed => ExitCode::FAILURE,
    })
}
