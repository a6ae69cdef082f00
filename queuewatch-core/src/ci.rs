//! CI server abstraction
//!
//! The monitor only needs three read-only queries from the CI server. Each
//! pass issues one node listing, one status poll per node and one queue
//! fetch.

use async_trait::async_trait;

use crate::domain::{NodeStatus, QueuedTask};
use crate::error::CiError;

/// Read-only view of a CI server's nodes and build queue
#[async_trait]
pub trait CiServer: Send + Sync {
    /// Lists node names in server order
    async fn list_nodes(&self) -> Result<Vec<String>, CiError>;

    /// Polls the live status of one node
    async fn node_status(&self, name: &str) -> Result<NodeStatus, CiError>;

    /// Fetches the current build queue in queue order
    async fn queued_tasks(&self) -> Result<Vec<QueuedTask>, CiError>;
}
