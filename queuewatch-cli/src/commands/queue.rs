//! Build queue listing command

use anyhow::Result;
use chrono::Utc;
use colored::*;
use queuewatch_core::{CiServer, StuckJobDetector, TaskDiagnostic};

use crate::config::Config;

/// List the build queue, highlighting tasks over the configured limit
pub async fn list_queue(config: &Config) -> Result<()> {
    let connection = config.load_connection()?;
    let client = config.jenkins_client(&connection)?;

    let tasks = client.queued_tasks().await?;

    if tasks.is_empty() {
        println!("{}", "No jobs queued.".yellow());
        return Ok(());
    }

    let detector = StuckJobDetector::new(connection.queue_time_limit_minutes);
    let verdict = detector.evaluate(&tasks, Utc::now());

    println!(
        "{}",
        format!(
            "Found {} queued task(s), limit {} minute(s):",
            tasks.len(),
            detector.threshold_minutes()
        )
        .bold()
    );
    println!();
    for (task, diagnostic) in tasks.iter().zip(&verdict.diagnostics) {
        println!("  {} Task {} {}", "▸".cyan(), task.id, task.name.bold());
        println!("    Waiting:      {}", colorize_wait(diagnostic));
        if !task.reason.is_empty() {
            println!("    Why:          {}", task.reason.dimmed());
        }
        println!();
    }

    if verdict.stuck {
        println!("{}", "Jobs stuck".red().bold());
    } else {
        println!("{}", "No jobs stuck".green());
    }

    Ok(())
}

/// Colorize a wait time for display
fn colorize_wait(diagnostic: &TaskDiagnostic) -> ColoredString {
    let text = format!("{} minute(s)", diagnostic.wait_minutes);
    if diagnostic.offending {
        text.red()
    } else {
        text.normal()
    }
}
