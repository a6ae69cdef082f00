//! Queuewatch SNS Notifier
//!
//! Publishes stuck-queue reports to an Amazon SNS topic with the AWS SDK.
//! How the SDK loads its configuration (region, profile, credential files,
//! endpoint) is decided by the caller through [`SnsSettings`]; the process
//! environment is never modified here.

mod sns;
#[cfg(test)]
mod test_support;

pub use sns::{SnsNotifier, SnsSettings, region_from_topic_arn};
