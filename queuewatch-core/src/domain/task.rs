//! Queued task domain types

use chrono::{DateTime, Utc};

/// An item waiting in the CI server's build queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedTask {
    pub id: i64,
    pub name: String,
    /// Server-provided explanation of why the task is still waiting
    pub reason: String,
    /// Enqueue instant in epoch milliseconds, as reported by the server
    pub enqueued_at_millis: i64,
}

impl QueuedTask {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        reason: impl Into<String>,
        enqueued_at_millis: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            reason: reason.into(),
            enqueued_at_millis,
        }
    }

    /// Whole minutes this task has been waiting at `now`
    ///
    /// Both sides are floored to the minute before subtracting, so two tasks
    /// enqueued within the same wall-clock minute always report the same wait.
    pub fn wait_minutes(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp().div_euclid(60) - self.enqueued_at_millis.div_euclid(60_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wait_minutes_floors_both_sides() {
        // 10:00:59 now, enqueued 09:59:01 -> 600 - 599 = 1
        let now = Utc.timestamp_opt(36_059, 0).unwrap();
        let task = QueuedTask::new(1, "build", "waiting", 35_941_000);
        assert_eq!(task.wait_minutes(now), 1);
    }

    #[test]
    fn test_wait_minutes_same_minute_is_zero() {
        let now = Utc.timestamp_opt(36_059, 0).unwrap();
        let task = QueuedTask::new(1, "build", "waiting", 36_000_000);
        assert_eq!(task.wait_minutes(now), 0);
    }
}
