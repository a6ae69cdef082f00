//! Monitoring pass command

use anyhow::{Context, Result};
use queuewatch_core::{ConsoleSink, Monitor, Report, RunStatus};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;

/// Runs one monitoring pass and prints the run status
pub async fn run_check(config: &Config) -> Result<RunStatus> {
    let connection = config.load_connection()?;
    let client = config.jenkins_client(&connection)?;
    let notifier = config.sns_notifier(&connection).await;

    let monitor = Monitor::for_connection(&connection, Arc::new(client), Arc::new(notifier));

    let report = if config.debug {
        Report::with_sink(ConsoleSink)
    } else {
        Report::new()
    };

    info!("Checking {}", connection.url);

    let outcome = monitor
        .run(report)
        .await
        .context("Monitoring pass aborted")?;

    if outcome.status == RunStatus::Failed {
        // The send error is only in the transcript; surface it locally.
        if let Some(last) = outcome.transcript.lines().last() {
            eprintln!("{}", last);
        }
    }

    println!("{}", outcome.status);

    Ok(outcome.status)
}
