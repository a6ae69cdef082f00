//! Configuration module
//!
//! Turns command-line settings into ready-to-use adapters: the Jenkins
//! client for the active connection and the SNS notifier.

use anyhow::{Context, Result};
use clap::Args;
use queuewatch_client::JenkinsClient;
use queuewatch_core::{Connection, MonitorConfig};
use queuewatch_notify::{SnsNotifier, SnsSettings};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// AWS settings for the notifier
///
/// Anything left unset is resolved by the SDK's default provider chain.
#[derive(Args, Debug, Clone, Default)]
pub struct AwsArgs {
    /// Region to publish in (defaults to the region in the topic ARN)
    #[arg(long = "aws-region", env = "AWS_REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long = "aws-profile", env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Shared credentials file to read instead of ~/.aws/credentials
    #[arg(long = "aws-credentials-file", env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// SNS endpoint override
    #[arg(long = "sns-endpoint", env = "QUEUEWATCH_SNS_ENDPOINT")]
    pub endpoint: Option<String>,
}

impl AwsArgs {
    /// Builds the notifier settings
    pub fn sns_settings(&self, timeout: Duration) -> SnsSettings {
        SnsSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
            credentials_file: self.credentials_file.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Some(timeout),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Connections file
    pub config_path: PathBuf,

    /// Echo report lines to stdout
    pub debug: bool,

    /// Timeout applied to every HTTP request
    pub timeout: Duration,

    pub aws: AwsArgs,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout.as_secs() == 0 {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Loads the connections file and returns the monitored connection
    pub fn load_connection(&self) -> Result<Connection> {
        let monitor_config = MonitorConfig::load(&self.config_path)
            .with_context(|| format!("Failed to load {}", self.config_path.display()))?;
        let connection = monitor_config
            .active_connection()
            .context("No usable connection in config")?
            .clone();

        info!(
            "Loaded configuration: url={}, queue_time_limit={}m",
            connection.url, connection.queue_time_limit_minutes
        );

        Ok(connection)
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    /// Creates a Jenkins client for `connection`
    pub fn jenkins_client(&self, connection: &Connection) -> Result<JenkinsClient> {
        Ok(JenkinsClient::with_client(
            &connection.url,
            &connection.username,
            &connection.password,
            self.http_client()?,
        ))
    }

    /// Creates the SNS notifier for the connection's topic
    pub async fn sns_notifier(&self, connection: &Connection) -> SnsNotifier {
        let settings = self.aws.sns_settings(self.timeout);
        if settings.resolve_region(&connection.topic).is_none() {
            warn!("No AWS region given and none in topic; relying on the SDK default chain");
        }
        SnsNotifier::connect(&settings, &connection.topic).await
    }
}
