//! Notification abstraction

use async_trait::async_trait;

use crate::error::NotifyError;

/// Acknowledgement returned by a successful publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: String,
}

/// Publishes a message to a pub/sub topic
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic: &str, message: &str) -> Result<PublishReceipt, NotifyError>;
}
