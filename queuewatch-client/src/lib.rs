//! Queuewatch Jenkins Client
//!
//! A small, typed client for the parts of the Jenkins JSON API the queue
//! monitor reads: the node list, per-node status and the build queue.
//!
//! # Example
//!
//! ```no_run
//! use queuewatch_client::JenkinsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JenkinsClient::new("https://ci.example.com", "monitor", "token");
//!
//!     for name in client.list_nodes().await? {
//!         let node = client.get_node(&name).await?;
//!         println!("{}", node.to_status());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod nodes;
mod queue;
#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use nodes::NodeInfo;
pub use queue::{QueueItem, QueueTask};

use async_trait::async_trait;
use queuewatch_core::{CiError, CiServer, NodeStatus, QueuedTask};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

/// HTTP client for a Jenkins controller
#[derive(Clone)]
pub struct JenkinsClient {
    /// Base URL of the controller (e.g., "https://ci.example.com")
    base_url: String,
    username: String,
    password: String,
    /// HTTP client instance
    client: Client,
}

impl JenkinsClient {
    /// Create a new Jenkins client using basic authentication
    ///
    /// # Arguments
    /// * `base_url` - The controller URL
    /// * `username` - Jenkins user
    /// * `password` - Password or API token for `username`
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_client(base_url, username, password, Client::new())
    }

    /// Create a new Jenkins client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            client,
        }
    }

    /// Get the base URL of the controller
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str, tree: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .query(&[("tree", tree)])
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl std::fmt::Debug for JenkinsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl JenkinsClient {
    /// Converts a client error for the monitor, flagging rejected credentials
    fn ci_error(&self, err: ClientError) -> CiError {
        if err.is_unauthorized() {
            warn!(
                "Jenkins at {} rejected the credentials for user {}",
                self.base_url, self.username
            );
        }
        err.into()
    }
}

#[async_trait]
impl CiServer for JenkinsClient {
    async fn list_nodes(&self) -> std::result::Result<Vec<String>, CiError> {
        JenkinsClient::list_nodes(self)
            .await
            .map_err(|e| self.ci_error(e))
    }

    async fn node_status(&self, name: &str) -> std::result::Result<NodeStatus, CiError> {
        let node = self.get_node(name).await.map_err(|e| self.ci_error(e))?;
        Ok(node.to_status())
    }

    async fn queued_tasks(&self) -> std::result::Result<Vec<QueuedTask>, CiError> {
        let items = self.get_queue().await.map_err(|e| self.ci_error(e))?;
        Ok(items.into_iter().map(QueueItem::into_task).collect())
    }
}
