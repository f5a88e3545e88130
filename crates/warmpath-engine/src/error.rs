//! Engine error types

use thiserror::Error;
use warmpath_domain::NodeId;

/// Errors that can occur during graph construction and queries
#[derive(Error, Debug)]
pub enum EngineError {
    /// A query referenced a node id absent from the supplied node set
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    /// Malformed input (dangling edge endpoint, out-of-range strength,
    /// zero depth)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Path search exceeded its explored-state budget
    #[error("Path search exhausted its state budget: explored {explored} states (budget {budget})")]
    ResourceExhausted {
        /// States enqueued before the search gave up
        explored: usize,
        /// The configured budget that was exceeded
        budget: usize,
    },
}
