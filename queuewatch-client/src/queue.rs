//! Build queue API endpoint

use queuewatch_core::QueuedTask;
use serde::Deserialize;
use tracing::debug;

use crate::JenkinsClient;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct Queue {
    #[serde(default)]
    items: Vec<QueueItem>,
}

/// A single entry of `/queue/api/json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: i64,
    pub task: QueueTask,
    /// Null once Jenkins has no blocking reason to report
    pub why: Option<String>,
    /// Epoch milliseconds
    pub in_queue_since: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueTask {
    #[serde(default)]
    pub name: String,
}

impl QueueItem {
    pub fn into_task(self) -> QueuedTask {
        QueuedTask::new(
            self.id,
            self.task.name,
            self.why.unwrap_or_default(),
            self.in_queue_since,
        )
    }
}

impl JenkinsClient {
    // =============================================================================
    // Build Queue
    // =============================================================================

    /// Fetch the build queue in queue order
    pub async fn get_queue(&self) -> Result<Vec<QueueItem>> {
        let url = format!("{}/queue/api/json", self.base_url);
        let queue: Queue = self
            .get_json(&url, "items[id,why,inQueueSince,task[name]]")
            .await?;

        debug!("Jenkins reported {} queued item(s)", queue.items.len());

        Ok(queue.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_queue() {
        let body = r#"{
            "_class": "hudson.model.Queue",
            "items": [
                {
                    "_class": "hudson.model.Queue$BuildableItem",
                    "id": 412,
                    "inQueueSince": 1700000000123,
                    "task": {"_class": "hudson.model.FreeStyleProject", "name": "nightly"},
                    "why": "Waiting for next available executor"
                },
                {
                    "id": 413,
                    "inQueueSince": 1700000060000,
                    "task": {"name": "deploy"},
                    "why": null
                }
            ]
        }"#;

        let queue: Queue = serde_json::from_str(body).unwrap();
        let tasks: Vec<QueuedTask> = queue.items.into_iter().map(QueueItem::into_task).collect();

        assert_eq!(
            tasks,
            vec![
                QueuedTask::new(412, "nightly", "Waiting for next available executor", 1_700_000_000_123),
                QueuedTask::new(413, "deploy", "", 1_700_000_060_000),
            ]
        );
    }

    #[test]
    fn test_decode_empty_queue() {
        let queue: Queue = serde_json::from_str(r#"{"_class":"hudson.model.Queue","items":[]}"#).unwrap();
        assert!(queue.items.is_empty());
    }
}
