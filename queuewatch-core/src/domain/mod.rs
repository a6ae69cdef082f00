//! Core domain types
//!
//! Values derived fresh from the CI server on every poll. Nothing here is
//! persisted between runs.

pub mod node;
pub mod task;

pub use node::NodeStatus;
pub use task::QueuedTask;
