//! SNS publish client

use async_trait::async_trait;
use aws_config::profile::profile_file::{ProfileFileKind, ProfileFiles};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, ConfigLoader, Region};
use aws_sdk_sns::Client;
use aws_sdk_sns::error::{DisplayErrorContext, SdkError};
use aws_sdk_sns::operation::publish::PublishError;
use queuewatch_core::{Notifier, NotifyError, PublishReceipt};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// How the SDK configuration is loaded
///
/// Unset fields fall back to the SDK's default provider chain: environment
/// variables, shared config and credentials files, then container and
/// instance roles.
#[derive(Debug, Clone, Default)]
pub struct SnsSettings {
    /// Region to publish in; when unset, taken from the topic ARN
    pub region: Option<String>,

    /// Named profile in the shared config files
    pub profile: Option<String>,

    /// Replaces the default `~/.aws/credentials` location
    pub credentials_file: Option<PathBuf>,

    /// Overrides the SNS endpoint URL
    pub endpoint: Option<String>,

    /// Limit for a whole publish call
    pub timeout: Option<Duration>,
}

impl SnsSettings {
    /// Region used for `topic`: the explicit region, else the ARN's
    pub fn resolve_region(&self, topic: &str) -> Option<String> {
        self.region
            .clone()
            .or_else(|| region_from_topic_arn(topic).map(str::to_string))
    }

    fn loader(&self, topic: &str) -> ConfigLoader {
        // Publishing happens at most once per run and is never retried.
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(region) = self.resolve_region(topic) {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(path) = &self.credentials_file {
            loader = loader.profile_files(
                ProfileFiles::builder()
                    .include_default_config_file(true)
                    .with_file(ProfileFileKind::Credentials, path)
                    .build(),
            );
        }
        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some(timeout) = self.timeout {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        loader
    }
}

/// Extracts the region field of an SNS topic ARN
///
/// `arn:aws:sns:us-east-1:123456789012:alerts` yields `us-east-1`.
pub fn region_from_topic_arn(arn: &str) -> Option<&str> {
    let mut parts = arn.split(':');
    if parts.next() != Some("arn") {
        return None;
    }
    let _partition = parts.next()?;
    if parts.next() != Some("sns") {
        return None;
    }
    parts.next().filter(|region| !region.is_empty())
}

/// Notifier backed by Amazon SNS
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: Client,
}

impl SnsNotifier {
    /// Loads the SDK configuration for publishing to `topic`
    pub async fn connect(settings: &SnsSettings, topic: &str) -> Self {
        let sdk_config = settings.loader(topic).load().await;
        Self::from_client(Client::new(&sdk_config))
    }

    /// Wraps an already configured SNS client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn map_sdk_error(err: SdkError<PublishError>) -> NotifyError {
    let detail = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::ServiceError(service) => NotifyError::Api {
            status: service.raw().status().as_u16(),
            message: detail,
        },
        SdkError::ResponseError(_) => NotifyError::Parse(detail),
        _ => NotifyError::Request(detail),
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic: &str, message: &str) -> Result<PublishReceipt, NotifyError> {
        if self.client.config().region().is_none() {
            return Err(NotifyError::Credentials(format!(
                "No region configured and none found in topic {}",
                topic
            )));
        }

        debug!("Publishing {} byte(s) to {}", message.len(), topic);

        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let message_id = output
            .message_id()
            .ok_or_else(|| NotifyError::Parse("PublishResponse without MessageId".to_string()))?;

        Ok(PublishReceipt {
            message_id: message_id.to_string(),
        })
    }
}
