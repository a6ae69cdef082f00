//! Monitoring pass
//!
//! Ties the CI server, the detector and the notifier together. A pass is a
//! single sequential sweep: nodes, then queue, then (only when the queue is
//! stuck) one publish of the finished report.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::ci::CiServer;
use crate::config::Connection;
use crate::detector::StuckJobDetector;
use crate::error::MonitorError;
use crate::notifier::{Notifier, PublishReceipt};
use crate::report::Report;

pub const NO_JOBS_QUEUED: &str = "No jobs queued";
pub const JOBS_STUCK: &str = "Jobs stuck";
pub const NO_JOBS_STUCK: &str = "No jobs stuck";

/// Status signal returned to the invoker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// The queue was stuck and the notification could not be published
    Failed,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Ok => write!(f, "Ok"),
            RunStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Everything a completed pass produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub status: RunStatus,
    pub stuck: bool,
    /// Final report, including any publish error appended after sending
    pub transcript: String,
    pub receipt: Option<PublishReceipt>,
}

/// Single-pass queue monitor for one CI endpoint
pub struct Monitor {
    ci: Arc<dyn CiServer>,
    notifier: Arc<dyn Notifier>,
    detector: StuckJobDetector,
    topic: String,
}

impl Monitor {
    /// Creates a monitor
    ///
    /// # Arguments
    /// * `ci` - CI server to poll
    /// * `notifier` - Destination for stuck-queue reports
    /// * `topic` - Topic identifier passed to the notifier
    /// * `threshold_minutes` - Maximum tolerated queue wait
    pub fn new(
        ci: Arc<dyn CiServer>,
        notifier: Arc<dyn Notifier>,
        topic: impl Into<String>,
        threshold_minutes: u64,
    ) -> Self {
        Self {
            ci,
            notifier,
            detector: StuckJobDetector::new(threshold_minutes),
            topic: topic.into(),
        }
    }

    /// Creates a monitor from a configured connection
    pub fn for_connection(
        connection: &Connection,
        ci: Arc<dyn CiServer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(
            ci,
            notifier,
            connection.topic.clone(),
            connection.queue_time_limit_minutes,
        )
    }

    /// Runs one pass against the current time
    pub async fn run(&self, report: Report) -> Result<RunOutcome, MonitorError> {
        self.run_at(report, Utc::now()).await
    }

    /// Runs one pass, measuring queue waits against `now`
    ///
    /// Any CI query failure aborts the pass before a verdict is reached and
    /// nothing is published.
    pub async fn run_at(
        &self,
        mut report: Report,
        now: DateTime<Utc>,
    ) -> Result<RunOutcome, MonitorError> {
        let nodes = self
            .ci
            .list_nodes()
            .await
            .map_err(MonitorError::ListNodes)?;

        debug!("Polling {} node(s)", nodes.len());

        for name in nodes {
            let status = self
                .ci
                .node_status(&name)
                .await
                .map_err(|source| MonitorError::NodeStatus {
                    node: name.clone(),
                    source,
                })?;
            report.record(status.report_line());
        }

        let tasks = self.ci.queued_tasks().await.map_err(MonitorError::Queue)?;

        let stuck = if tasks.is_empty() {
            report.record(NO_JOBS_QUEUED);
            false
        } else {
            let verdict = self.detector.evaluate(&tasks, now);
            for diagnostic in &verdict.diagnostics {
                report.record(diagnostic.line.clone());
            }
            for offender in verdict.offending() {
                warn!(
                    "Task {} has waited {} minute(s), limit is {}",
                    offender.task_id,
                    offender.wait_minutes,
                    self.detector.threshold_minutes()
                );
            }
            verdict.stuck
        };

        if !stuck {
            report.record(NO_JOBS_STUCK);
            info!("Build queue healthy");
            return Ok(RunOutcome {
                status: RunStatus::Ok,
                stuck: false,
                transcript: report.finalize(),
                receipt: None,
            });
        }

        report.record(JOBS_STUCK);
        let message = report.finalize();

        info!("Build queue stuck, publishing report to {}", self.topic);

        match self.notifier.publish(&self.topic, &message).await {
            Ok(receipt) => {
                info!("Notification published: {}", receipt.message_id);
                Ok(RunOutcome {
                    status: RunStatus::Ok,
                    stuck: true,
                    transcript: message,
                    receipt: Some(receipt),
                })
            }
            Err(e) => {
                error!("Failed to publish notification: {}", e);
                report.record(format!("Notification send error: {}", e));
                Ok(RunOutcome {
                    status: RunStatus::Failed,
                    stuck: true,
                    transcript: report.finalize(),
                    receipt: None,
                })
            }
        }
    }
}
