//! Queuewatch Core
//!
//! Stuck build-queue detection for CI servers.
//!
//! This crate contains:
//! - Domain types: nodes and queued tasks as seen in one poll
//! - Configuration: the endpoint list and its staleness threshold
//! - Report aggregation and stuck-job detection
//! - The [`Monitor`] pass, written against the [`CiServer`] and
//!   [`Notifier`] traits so adapters can be swapped in tests

pub mod ci;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
pub mod monitor;
pub mod notifier;
pub mod report;

pub use ci::CiServer;
pub use config::{Connection, MonitorConfig};
pub use detector::{StuckJobDetector, TaskDiagnostic, Verdict};
pub use domain::{NodeStatus, QueuedTask};
pub use error::{CiError, ConfigError, MonitorError, NotifyError};
pub use monitor::{Monitor, RunOutcome, RunStatus};
pub use notifier::{Notifier, PublishReceipt};
pub use report::{ConsoleSink, Report, ReportSink};
