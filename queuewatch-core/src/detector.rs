//! Stuck-job detection
//!
//! Classifies the build queue as healthy or stuck by comparing each task's
//! wait time against a single threshold. One offending task is enough.

use chrono::{DateTime, Utc};

use crate::domain::QueuedTask;

/// Diagnostic produced for one queued task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDiagnostic {
    pub task_id: i64,
    pub wait_minutes: i64,
    /// True when the wait exceeded the threshold
    pub offending: bool,
    /// Report line describing the task
    pub line: String,
}

/// Result of evaluating one queue snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub stuck: bool,
    /// One entry per task, in queue order
    pub diagnostics: Vec<TaskDiagnostic>,
}

impl Verdict {
    /// Diagnostics for tasks that exceeded the threshold
    pub fn offending(&self) -> impl Iterator<Item = &TaskDiagnostic> {
        self.diagnostics.iter().filter(|d| d.offending)
    }
}

/// Threshold-based queue classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StuckJobDetector {
    threshold_minutes: u64,
}

impl StuckJobDetector {
    pub fn new(threshold_minutes: u64) -> Self {
        Self { threshold_minutes }
    }

    pub fn threshold_minutes(&self) -> u64 {
        self.threshold_minutes
    }

    /// True when a wait of `wait_minutes` exceeds the threshold
    pub fn exceeds(&self, wait_minutes: i64) -> bool {
        // A negative wait (clock skew) can never exceed a non-negative threshold.
        u64::try_from(wait_minutes).is_ok_and(|wait| wait > self.threshold_minutes)
    }

    /// Evaluates `tasks` as observed at `now`
    ///
    /// Diagnostics keep the order the tasks were given in. An empty slice
    /// yields a healthy verdict with no diagnostics.
    pub fn evaluate(&self, tasks: &[QueuedTask], now: DateTime<Utc>) -> Verdict {
        let diagnostics: Vec<TaskDiagnostic> = tasks
            .iter()
            .map(|task| {
                let wait_minutes = task.wait_minutes(now);
                TaskDiagnostic {
                    task_id: task.id,
                    wait_minutes,
                    offending: self.exceeds(wait_minutes),
                    line: format!(
                        "Task ID: {}, Task Name: {}, Why: {}, In Queue Since {} minutes",
                        task.id, task.name, task.reason, wait_minutes
                    ),
                }
            })
            .collect();

        Verdict {
            stuck: diagnostics.iter().any(|d| d.offending),
            diagnostics,
        }
    }
}
