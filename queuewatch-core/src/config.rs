//! Monitor configuration
//!
//! The configuration document lists one or more CI endpoints. Only the first
//! entry is monitored; the rest are accepted so one file can be shared
//! between deployments.

use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Top-level configuration document
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    pub connections: Vec<Connection>,
}

/// Credentials and thresholds for one CI endpoint
#[derive(Clone, Deserialize)]
pub struct Connection {
    /// Base URL of the CI server (e.g., "https://ci.example.com")
    pub url: String,

    pub username: String,

    pub password: String,

    /// Destination topic for stuck-queue notifications
    #[serde(rename = "snstopic")]
    pub topic: String,

    /// Minutes a task may wait before the queue counts as stuck
    #[serde(rename = "buildqueuetimelimit")]
    pub queue_time_limit_minutes: u64,
}

impl MonitorConfig {
    /// Parses a configuration document from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Returns the connection monitored by this run, validated
    pub fn active_connection(&self) -> Result<&Connection, ConfigError> {
        let connection = self.connections.first().ok_or(ConfigError::NoConnections)?;
        connection.validate()?;
        Ok(connection)
    }
}

impl Connection {
    /// Validates the connection
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::Invalid("url cannot be empty".into()));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "url must start with http:// or https://".into(),
            ));
        }

        if self.username.is_empty() {
            return Err(ConfigError::Invalid("username cannot be empty".into()));
        }

        if self.topic.is_empty() {
            return Err(ConfigError::Invalid("snstopic cannot be empty".into()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("topic", &self.topic)
            .field("queue_time_limit_minutes", &self.queue_time_limit_minutes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "connections": [
            {
                "url": "https://ci.example.com",
                "username": "monitor",
                "password": "hunter2",
                "snstopic": "arn:aws:sns:us-east-1:123456789012:ci-alerts",
                "buildqueuetimelimit": 30
            },
            {
                "url": "https://other.example.com",
                "username": "other",
                "password": "secret",
                "snstopic": "arn:aws:sns:eu-west-1:123456789012:other",
                "buildqueuetimelimit": 5
            }
        ]
    }"#;

    #[test]
    fn test_first_connection_is_active() {
        let config = MonitorConfig::from_json(SAMPLE).unwrap();
        let active = config.active_connection().unwrap();
        assert_eq!(active.url, "https://ci.example.com");
        assert_eq!(active.queue_time_limit_minutes, 30);
        assert_eq!(active.topic, "arn:aws:sns:us-east-1:123456789012:ci-alerts");
    }

    #[test]
    fn test_missing_threshold_is_rejected() {
        let text = r#"{"connections":[{"url":"https://ci","username":"u","password":"p","snstopic":"t"}]}"#;
        assert!(matches!(
            MonitorConfig::from_json(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let text = r#"{"connections":[{"url":"https://ci","username":"u","password":"p","snstopic":"t","buildqueuetimelimit":-1}]}"#;
        assert!(MonitorConfig::from_json(text).is_err());
    }

    #[test]
    fn test_empty_connections() {
        let config = MonitorConfig::from_json(r#"{"connections":[]}"#).unwrap();
        assert!(matches!(
            config.active_connection(),
            Err(ConfigError::NoConnections)
        ));
    }

    #[test]
    fn test_connection_validation() {
        let mut config = MonitorConfig::from_json(SAMPLE).unwrap();
        assert!(config.connections[0].validate().is_ok());

        config.connections[0].url = "ci.example.com".to_string();
        assert!(matches!(
            config.active_connection(),
            Err(ConfigError::Invalid(_))
        ));

        config.connections[0].url = "https://ci.example.com".to_string();
        config.connections[0].topic = String::new();
        assert!(config.active_connection().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = MonitorConfig::from_json(SAMPLE).unwrap();
        let debug = format!("{:?}", config.connections[0]);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(config.connections.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MonitorConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
