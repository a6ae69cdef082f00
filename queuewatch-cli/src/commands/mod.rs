//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod check;
mod nodes;
mod queue;

use anyhow::Result;
use clap::Subcommand;
use queuewatch_core::RunStatus;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run one monitoring pass and notify if the queue is stuck (default)
    Check,
    /// Show the status of every node
    Nodes,
    /// Show the build queue with wait times
    Queue,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. Only `check` can
/// produce a `Failed` status.
pub async fn handle_command(command: Commands, config: &Config) -> Result<RunStatus> {
    match command {
        Commands::Check => check::run_check(config).await,
        Commands::Nodes => nodes::list_nodes(config).await.map(|_| RunStatus::Ok),
        Commands::Queue => queue::list_queue(config).await.map(|_| RunStatus::Ok),
    }
}
