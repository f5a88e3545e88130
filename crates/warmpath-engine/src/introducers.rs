//! Introducer ranking - who can best introduce us to a prospect
//!
//! Scores every direct connection to the prospect by edge strength, then
//! boosts preferred connection types and well-placed introducer roles. The
//! multipliers stack: a board-member donor reached through a preferred-type
//! edge receives all three boosts.

use crate::config::IntroducerOptions;
use crate::error::EngineError;
use crate::graph::RelationshipGraph;
use serde::{Deserialize, Serialize};
use tracing::info;
use warmpath_domain::{Edge, Node, NodeId, NodeRole};

/// Boost for edges whose connection type is in the preferred set
pub const PREFERRED_TYPE_BOOST: f64 = 1.5;

/// Boost for introducers who sit on the board
pub const BOARD_MEMBER_BOOST: f64 = 1.3;

/// Boost for introducers who are existing donors
pub const DONOR_BOOST: f64 = 1.2;

/// A candidate introducer with their connection to the prospect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedIntroducer {
    /// The person who could make the introduction
    pub introducer: Node,

    /// Their direct edge to the prospect
    pub connection_to_prospect: Edge,

    /// Final score after boosts
    pub score: f64,
}

/// Rank the best direct introducers to `prospect`
///
/// Builds a fresh graph from the supplied nodes and edges, then delegates
/// to [`rank_introducers_on_graph`].
pub fn find_best_introducers(
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    prospect: &NodeId,
    options: &IntroducerOptions,
) -> Result<Vec<RankedIntroducer>, EngineError> {
    let graph = RelationshipGraph::build(nodes, edges)?;
    rank_introducers_on_graph(&graph, prospect, options)
}

/// Rank the best direct introducers over an already-built graph
pub fn rank_introducers_on_graph(
    graph: &RelationshipGraph,
    prospect: &NodeId,
    options: &IntroducerOptions,
) -> Result<Vec<RankedIntroducer>, EngineError> {
    if graph.get_node(prospect).is_none() {
        return Err(EngineError::NotFound(prospect.clone()));
    }

    let mut ranked: Vec<RankedIntroducer> = graph
        .neighbors(prospect)
        .into_iter()
        .filter(|(_, edge)| edge.strength >= options.min_strength)
        .map(|(introducer, edge)| {
            let mut score = edge.strength as f64;
            if options.preferred_types.contains(&edge.edge_type) {
                score *= PREFERRED_TYPE_BOOST;
            }
            if introducer.role == NodeRole::BoardMember {
                score *= BOARD_MEMBER_BOOST;
            }
            if introducer.role == NodeRole::Donor {
                score *= DONOR_BOOST;
            }
            RankedIntroducer {
                introducer: introducer.clone(),
                connection_to_prospect: edge.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    info!(
        "Ranked {} introducer candidates for {}",
        ranked.len(),
        prospect
    );
    Ok(ranked)
}
