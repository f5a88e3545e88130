//! Path search - breadth-first enumeration of simple paths
//!
//! Each queue entry carries the full path so far, so the search returns
//! every qualifying simple path rather than just the shortest ones;
//! ranking by strength happens downstream. Complexity is combinatorial in
//! dense graphs, so alongside the depth cap the search enforces an
//! explored-state budget and fails loudly when it is exceeded.

use crate::error::EngineError;
use crate::graph::RelationshipGraph;
use std::collections::VecDeque;

/// An unscored path through the graph: dense node indices plus the edge
/// slots connecting consecutive nodes
#[derive(Debug, Clone)]
pub(crate) struct RawPath {
    pub nodes: Vec<usize>,
    pub edges: Vec<usize>,
}

/// Enumerate all simple paths from `start` to `end` with at most
/// `max_depth` edges, traversing only edges of strength >= `min_strength`.
///
/// When `start == end` no paths are produced: a path needs at least one
/// edge, and cycle avoidance prevents returning to the start.
pub(crate) fn enumerate_simple_paths(
    graph: &RelationshipGraph,
    start: usize,
    end: usize,
    max_depth: usize,
    min_strength: u8,
    max_states: usize,
) -> Result<Vec<RawPath>, EngineError> {
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    let mut explored = 1usize;
    queue.push_back(RawPath {
        nodes: vec![start],
        edges: Vec::new(),
    });

    while let Some(current) = queue.pop_front() {
        let &head = current.nodes.last().unwrap_or(&start);

        // A completed path is recorded and never extended further
        if head == end && current.nodes.len() > 1 {
            found.push(current);
            continue;
        }

        if current.edges.len() >= max_depth {
            continue;
        }

        for &(neighbor, slot) in graph.adjacency_of(head) {
            if graph.edge_at(slot).strength < min_strength {
                continue;
            }
            // Simple paths only: a node appears at most once
            if current.nodes.contains(&neighbor) {
                continue;
            }

            explored += 1;
            if explored > max_states {
                tracing::warn!(
                    "Path search gave up after {} states (budget {})",
                    explored,
                    max_states
                );
                return Err(EngineError::ResourceExhausted {
                    explored,
                    budget: max_states,
                });
            }

            let mut next = current.clone();
            next.nodes.push(neighbor);
            next.edges.push(slot);
            queue.push_back(next);
        }
    }

    tracing::debug!(
        "Path search explored {} states, found {} paths",
        explored,
        found.len()
    );
    Ok(found)
}
