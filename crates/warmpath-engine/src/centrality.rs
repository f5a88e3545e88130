//! Network centrality - normalized aggregate connection weight
//!
//! Every edge contributes its full strength to both endpoints (not half
//! each), so one strong edge inflates both sides equally. Raw scores are
//! normalized against the best-connected node, which therefore always
//! scores exactly 100.

use crate::error::EngineError;
use crate::graph::RelationshipGraph;
use std::collections::HashMap;
use tracing::debug;
use warmpath_domain::{Edge, Node, NodeId};

/// Compute a 0-100 centrality score for every node in the network
///
/// Builds a fresh graph from the supplied nodes and edges, then delegates
/// to [`centrality_on_graph`]. With zero edges every node scores 0.
pub fn calculate_network_centrality(
    nodes: Vec<Node>,
    edges: Vec<Edge>,
) -> Result<HashMap<NodeId, u8>, EngineError> {
    let graph = RelationshipGraph::build(nodes, edges)?;
    Ok(centrality_on_graph(&graph))
}

/// Compute centrality over an already-built graph
pub fn centrality_on_graph(graph: &RelationshipGraph) -> HashMap<NodeId, u8> {
    let mut raw: HashMap<&NodeId, u32> = graph.nodes().iter().map(|n| (&n.id, 0u32)).collect();

    for edge in graph.edges() {
        // Full weight to each endpoint
        if let Some(score) = raw.get_mut(&edge.source) {
            *score += edge.strength as u32;
        }
        if let Some(score) = raw.get_mut(&edge.target) {
            *score += edge.strength as u32;
        }
    }

    let max = raw.values().copied().max().unwrap_or(0);
    debug!(
        "Centrality over {} nodes, max raw score {}",
        graph.node_count(),
        max
    );

    raw.into_iter()
        .map(|(id, score)| {
            let normalized = if max == 0 {
                0
            } else {
                (score as f64 / max as f64 * 100.0).round() as u8
            };
            (id.clone(), normalized)
        })
        .collect()
}
