//! Error types shared by the monitor and its collaborators

use thiserror::Error;

/// Errors reported by a CI server adapter
#[derive(Debug, Error)]
pub enum CiError {
    /// The request never produced a response
    #[error("CI request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("CI API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to parse CI response: {0}")]
    Parse(String),
}

/// Errors reported by a notification adapter
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification request failed: {0}")]
    Request(String),

    #[error("Notification API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Notification credentials unavailable: {0}")]
    Credentials(String),

    #[error("Failed to parse notification response: {0}")]
    Parse(String),
}

/// Fatal errors that abort a monitoring pass
///
/// Each variant names the CI query that failed. A publish failure is not
/// represented here; it surfaces as a `Failed` run status instead.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Failed to list nodes: {0}")]
    ListNodes(#[source] CiError),

    #[error("Failed to poll node {node}: {source}")]
    NodeStatus {
        node: String,
        #[source]
        source: CiError,
    },

    #[error("Failed to fetch build queue: {0}")]
    Queue(#[source] CiError),
}

/// Errors raised while loading the monitor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config contains no connections")]
    NoConnections,

    #[error("Invalid connection: {0}")]
    Invalid(String),
}
