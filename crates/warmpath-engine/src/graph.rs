//! In-memory relationship graph
//!
//! Nodes live in an arena indexed by dense integers (a hash map resolves
//! string ids to indices once, at the boundary), and each node carries an
//! adjacency list of (neighbor-index, edge-slot) pairs so the search loop
//! never re-hashes ids. Edges are logically undirected: one edge slot is
//! shared by both adjacency entries.

use crate::error::EngineError;
use std::collections::HashMap;
use warmpath_domain::{Edge, Node, NodeId};

/// An in-memory, symmetrically traversable relationship graph
///
/// Built fresh from caller-supplied data for each query; never shared
/// between queries and never mutated while a query runs.
#[derive(Debug, Default)]
pub struct RelationshipGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, usize)>>,
    pairs: HashMap<(usize, usize), usize>,
}

impl RelationshipGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from flat node and edge lists
    ///
    /// Every edge endpoint must reference a node in `nodes`; dangling
    /// endpoints, out-of-range strengths, and self-loops are rejected as
    /// `Validation` errors rather than silently tolerated.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, EngineError> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        tracing::debug!(
            "Built relationship graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Register a node, overwriting any existing node with the same id
    pub fn add_node(&mut self, node: Node) {
        match self.index.get(&node.id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                let i = self.nodes.len();
                self.index.insert(node.id.clone(), i);
                self.nodes.push(node);
                self.adjacency.push(Vec::new());
            }
        }
    }

    /// Register an edge, traversable in both directions
    ///
    /// A later edge between the same pair of nodes replaces the earlier one
    /// (last-write-wins); the graph is rebuilt per query, so duplicate
    /// pairs are a caller quirk, not an error.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), EngineError> {
        if edge.strength > 100 {
            return Err(EngineError::Validation(format!(
                "Edge strength {} is outside [0, 100] ({} - {})",
                edge.strength, edge.source, edge.target
            )));
        }

        let source = self.resolve_endpoint(&edge.source)?;
        let target = self.resolve_endpoint(&edge.target)?;
        if source == target {
            return Err(EngineError::Validation(format!(
                "Edge endpoints must differ: {}",
                edge.source
            )));
        }

        let key = (source.min(target), source.max(target));
        match self.pairs.get(&key) {
            Some(&slot) => {
                // Last write wins; adjacency entries keep pointing at the slot
                self.edges[slot] = edge;
            }
            None => {
                let slot = self.edges.len();
                self.edges.push(edge);
                self.pairs.insert(key, slot);
                self.adjacency[source].push((target, slot));
                self.adjacency[target].push((source, slot));
            }
        }
        Ok(())
    }

    /// Look up a node by id
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Neighbors of a node as (node, connecting edge) pairs
    ///
    /// Empty for isolated or unknown ids.
    pub fn neighbors(&self, id: &NodeId) -> Vec<(&Node, &Edge)> {
        match self.index.get(id) {
            Some(&i) => self.adjacency[i]
                .iter()
                .map(|&(n, slot)| (&self.nodes[n], &self.edges[slot]))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether any edge joins the two ids directly
    pub fn has_direct_connection(&self, a: &NodeId, b: &NodeId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.pairs.contains_key(&(ia.min(ib), ia.max(ib))),
            _ => false,
        }
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of registered edges (each undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn resolve(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn edge_at(&self, slot: usize) -> &Edge {
        &self.edges[slot]
    }

    pub(crate) fn adjacency_of(&self, index: usize) -> &[(usize, usize)] {
        &self.adjacency[index]
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn resolve_endpoint(&self, id: &NodeId) -> Result<usize, EngineError> {
        self.resolve(id).ok_or_else(|| {
            EngineError::Validation(format!("Edge references unknown node id: {}", id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warmpath_domain::{EdgeType, NodeRole};

    fn node(id: &str) -> Node {
        Node::new(id, id.to_uppercase(), NodeRole::Contact)
    }

    #[test]
    fn test_build_and_lookup() {
        let graph = RelationshipGraph::build(
            vec![node("a"), node("b")],
            vec![Edge::new("a", "b", EdgeType::Professional, 80)],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_node(&"a".into()).unwrap().name, "A");
        assert!(graph.get_node(&"z".into()).is_none());
    }

    #[test]
    fn test_edges_are_undirected() {
        let graph = RelationshipGraph::build(
            vec![node("a"), node("b")],
            vec![Edge::new("a", "b", EdgeType::Personal, 55)],
        )
        .unwrap();

        let from_a = graph.neighbors(&"a".into());
        let from_b = graph.neighbors(&"b".into());
        assert_eq!(from_a.len(), 1);
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_a[0].0.id, "b".into());
        assert_eq!(from_b[0].0.id, "a".into());
        assert_eq!(from_a[0].1.strength, 55);
        assert_eq!(from_b[0].1.strength, 55);

        assert!(graph.has_direct_connection(&"a".into(), &"b".into()));
        assert!(graph.has_direct_connection(&"b".into(), &"a".into()));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = RelationshipGraph::new();
        graph.add_node(node("a"));
        graph.add_node(Node::new("a", "Renamed", NodeRole::Donor));

        assert_eq!(graph.node_count(), 1);
        let stored = graph.get_node(&"a".into()).unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.role, NodeRole::Donor);
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let graph = RelationshipGraph::build(
            vec![node("a"), node("b")],
            vec![
                Edge::new("a", "b", EdgeType::Professional, 40),
                Edge::new("b", "a", EdgeType::Board, 90),
            ],
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 1);
        let neighbors = graph.neighbors(&"a".into());
        assert_eq!(neighbors[0].1.edge_type, EdgeType::Board);
        assert_eq!(neighbors[0].1.strength, 90);
    }

    #[test]
    fn test_dangling_endpoint_rejected() {
        let result = RelationshipGraph::build(
            vec![node("a")],
            vec![Edge::new("a", "ghost", EdgeType::Other, 10)],
        );

        match result {
            Err(EngineError::Validation(msg)) => assert!(msg.contains("ghost")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_strength_rejected() {
        let result = RelationshipGraph::build(
            vec![node("a"), node("b")],
            vec![Edge::new("a", "b", EdgeType::Other, 101)],
        );
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = RelationshipGraph::build(
            vec![node("a")],
            vec![Edge::new("a", "a", EdgeType::Family, 50)],
        );
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_isolated_and_unknown_neighbors_empty() {
        let graph = RelationshipGraph::build(vec![node("a")], vec![]).unwrap();
        assert!(graph.neighbors(&"a".into()).is_empty());
        assert!(graph.neighbors(&"z".into()).is_empty());
        assert!(!graph.has_direct_connection(&"a".into(), &"z".into()));
    }
}
