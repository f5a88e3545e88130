//! Path module - scored warm-path results
//!
//! A warm path is a simple (cycle-free) chain of at least two distinct
//! nodes, scored by the engine and ranked for the caller.

use crate::edge::EdgeType;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// A scored introduction path between two people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmPath {
    /// Ordered nodes along the path, source first, target last (length >= 2)
    pub path: Vec<Node>,

    /// Weak-link-penalized ranking score: sum of edge strengths multiplied
    /// by (weakest edge strength / 100)
    pub total_strength: f64,

    /// Mean edge strength along the path
    pub average_strength: f64,

    /// Strength of the weakest edge along the path
    pub weakest_link: u8,

    /// Distinct connection types along the path, in first-occurrence order
    pub connection_types: Vec<EdgeType>,

    /// Deterministic, rule-generated outreach suggestion
    pub suggested_approach: String,
}

impl WarmPath {
    /// Number of edges (hops) in the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Nodes between the source and the target
    pub fn intermediaries(&self) -> &[Node] {
        if self.path.len() <= 2 {
            &[]
        } else {
            &self.path[1..self.path.len() - 1]
        }
    }

    /// Whether this is a direct (single-edge) connection
    pub fn is_direct(&self) -> bool {
        self.path.len() == 2
    }
}

/// Result of a warm-path discovery query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmPathResult {
    /// Resolved source node
    pub from_node: Node,

    /// Resolved target node
    pub to_node: Node,

    /// Qualifying paths, sorted descending by ranking score and truncated
    /// to the caller's cap
    pub paths: Vec<WarmPath>,

    /// The highest-ranked path, if any path was found
    pub best_path: Option<WarmPath>,

    /// Whether any edge joins the two endpoints directly, regardless of
    /// strength or whether a path cleared the search filters
    pub direct_connection: bool,
}
