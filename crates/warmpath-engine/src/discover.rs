//! Warm-path discovery orchestration
//!
//! Ties the graph builder, path search, and scorer together: validate
//! inputs, detect direct connections, enumerate and score paths, then rank
//! and truncate. The call either completes or fails; there are no partial
//! results.

use crate::config::DiscoveryOptions;
use crate::error::EngineError;
use crate::graph::RelationshipGraph;
use crate::score::build_warm_path;
use crate::search::enumerate_simple_paths;
use tracing::{debug, info};
use warmpath_domain::{Edge, Node, NodeId, WarmPathResult};

/// Discover and rank warm paths from `from` to `to`
///
/// Builds a fresh graph from the supplied nodes and edges, then delegates
/// to [`discover_on_graph`].
pub fn discover_warm_paths(
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    from: &NodeId,
    to: &NodeId,
    options: &DiscoveryOptions,
) -> Result<WarmPathResult, EngineError> {
    let graph = RelationshipGraph::build(nodes, edges)?;
    discover_on_graph(&graph, from, to, options)
}

/// Discover and rank warm paths over an already-built graph
///
/// Hosts running several queries against the same network within one
/// request can build the graph once and call this directly.
pub fn discover_on_graph(
    graph: &RelationshipGraph,
    from: &NodeId,
    to: &NodeId,
    options: &DiscoveryOptions,
) -> Result<WarmPathResult, EngineError> {
    if options.max_depth == 0 {
        return Err(EngineError::Validation(
            "max_depth must be at least 1".to_string(),
        ));
    }

    let start = graph
        .resolve(from)
        .ok_or_else(|| EngineError::NotFound(from.clone()))?;
    let end = graph
        .resolve(to)
        .ok_or_else(|| EngineError::NotFound(to.clone()))?;

    info!(
        "Discovering warm paths {} -> {} (max_depth {}, min_strength {})",
        from, to, options.max_depth, options.min_strength
    );

    let direct_connection = graph.has_direct_connection(from, to);

    let raw_paths = enumerate_simple_paths(
        graph,
        start,
        end,
        options.max_depth,
        options.min_strength,
        options.max_states,
    )?;
    debug!("{} qualifying paths before ranking", raw_paths.len());

    let mut paths: Vec<_> = raw_paths
        .into_iter()
        .map(|raw| {
            let nodes: Vec<Node> = raw.nodes.iter().map(|&i| graph.node_at(i).clone()).collect();
            let edges: Vec<&Edge> = raw.edges.iter().map(|&slot| graph.edge_at(slot)).collect();
            build_warm_path(nodes, &edges)
        })
        .collect();

    // Stable descending sort: equal scores keep discovery order
    paths.sort_by(|a, b| b.total_strength.total_cmp(&a.total_strength));
    paths.truncate(options.max_paths);

    let best_path = paths.first().cloned();
    info!(
        "Returning {} ranked paths (direct connection: {})",
        paths.len(),
        direct_connection
    );

    Ok(WarmPathResult {
        from_node: graph.node_at(start).clone(),
        to_node: graph.node_at(end).clone(),
        paths,
        best_path,
        direct_connection,
    })
}
