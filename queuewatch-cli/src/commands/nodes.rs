//! Node listing command

use anyhow::Result;
use colored::*;
use queuewatch_core::NodeStatus;

use crate::config::Config;

/// List every node with its live status
pub async fn list_nodes(config: &Config) -> Result<()> {
    let connection = config.load_connection()?;
    let client = config.jenkins_client(&connection)?;

    let names = client.list_nodes().await?;

    if names.is_empty() {
        println!("{}", "No nodes registered.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} node(s):", names.len()).bold());
    println!();
    for name in names {
        let status = client.get_node(&name).await?.to_status();
        print_node_summary(&status);
    }

    Ok(())
}

/// Print a node summary
fn print_node_summary(node: &NodeStatus) {
    println!("  {} Node {}", "▸".cyan(), node.name.bold());
    println!("    Status:       {}", colorize_status(node));
    if node.online {
        println!("    Executors:    {}", node.executors);
        println!("    Idle:         {}", node.idle);
    }
    println!();
}

/// Colorize node status for display
fn colorize_status(node: &NodeStatus) -> ColoredString {
    match (node.online, node.idle) {
        (false, _) => "Offline".red(),
        (true, true) => "Online".green(),
        (true, false) => "Busy".yellow(),
    }
}
