//! Node domain model
//!
//! Represents a build agent as observed during a single poll of the CI server.

/// Live status of a CI node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStatus {
    /// Display name of the node
    pub name: String,

    /// Whether the node is currently connected
    pub online: bool,

    /// Number of configured executors
    pub executors: u32,

    /// Whether every executor is idle
    pub idle: bool,
}

impl NodeStatus {
    /// Creates a status for a node that is online
    pub fn online(name: impl Into<String>, executors: u32, idle: bool) -> Self {
        Self {
            name: name.into(),
            online: true,
            executors,
            idle,
        }
    }

    /// Creates a status for a node that is offline
    pub fn offline(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            online: false,
            executors: 0,
            idle: true,
        }
    }

    /// Formats the report line for this node
    pub fn report_line(&self) -> String {
        if self.online {
            format!(
                "Node {} is Online. No of executors {}, Is idle? {}",
                self.name, self.executors, self.idle
            )
        } else {
            format!("Node {} is Offline", self.name)
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report_line())
    }
}
