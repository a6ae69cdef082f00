//! Node-related API endpoints

use queuewatch_core::NodeStatus;
use serde::Deserialize;
use tracing::debug;

use crate::JenkinsClient;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ComputerSet {
    #[serde(default)]
    computer: Vec<ComputerName>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputerName {
    display_name: String,
}

/// Status fields of a single Jenkins computer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub display_name: String,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub num_executors: u32,
    #[serde(default)]
    pub idle: bool,
}

impl NodeInfo {
    /// Converts to the monitor's node status
    pub fn to_status(&self) -> NodeStatus {
        if self.offline {
            NodeStatus::offline(&self.display_name)
        } else {
            NodeStatus::online(&self.display_name, self.num_executors, self.idle)
        }
    }
}

/// Maps a display name to its `/computer/<segment>` path segment
///
/// The controller itself is addressed by a reserved segment rather than its
/// display name.
pub(crate) fn node_path_segment(name: &str) -> String {
    match name {
        "master" => "(master)".to_string(),
        "Built-In Node" => "(built-in)".to_string(),
        other => urlencoding::encode(other).into_owned(),
    }
}

impl JenkinsClient {
    // =============================================================================
    // Nodes
    // =============================================================================

    /// List the display names of all nodes, in server order
    pub async fn list_nodes(&self) -> Result<Vec<String>> {
        let url = format!("{}/computer/api/json", self.base_url);
        let set: ComputerSet = self.get_json(&url, "computer[displayName]").await?;

        debug!("Jenkins reported {} node(s)", set.computer.len());

        Ok(set.computer.into_iter().map(|c| c.display_name).collect())
    }

    /// Poll the live status of a node
    ///
    /// # Arguments
    /// * `name` - Display name as returned by [`JenkinsClient::list_nodes`]
    pub async fn get_node(&self, name: &str) -> Result<NodeInfo> {
        let url = format!(
            "{}/computer/{}/api/json",
            self.base_url,
            node_path_segment(name)
        );

        self.get_json(&url, "displayName,offline,numExecutors,idle")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_computer_set() {
        let body = r#"{
            "_class": "hudson.model.ComputerSet",
            "computer": [
                {"_class": "hudson.model.Hudson$MasterComputer", "displayName": "Built-In Node"},
                {"_class": "hudson.slaves.SlaveComputer", "displayName": "linux-agent 1"}
            ]
        }"#;

        let set: ComputerSet = serde_json::from_str(body).unwrap();
        let names: Vec<String> = set.computer.into_iter().map(|c| c.display_name).collect();
        assert_eq!(names, vec!["Built-In Node", "linux-agent 1"]);
    }

    #[test]
    fn test_decode_node_info() {
        let body = r#"{"displayName":"agent-1","idle":false,"numExecutors":4,"offline":false}"#;
        let info: NodeInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.to_status(), NodeStatus::online("agent-1", 4, false));
    }

    #[test]
    fn test_offline_node_info() {
        let body = r#"{"displayName":"agent-2","idle":true,"numExecutors":2,"offline":true}"#;
        let info: NodeInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.to_status().report_line(), "Node agent-2 is Offline");
    }

    #[test]
    fn test_node_path_segment() {
        assert_eq!(node_path_segment("master"), "(master)");
        assert_eq!(node_path_segment("Built-In Node"), "(built-in)");
        assert_eq!(node_path_segment("linux agent"), "linux%20agent");
        assert_eq!(node_path_segment("agent-1"), "agent-1");
    }
}
