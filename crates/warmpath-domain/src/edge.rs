//! Edge module - weighted, typed relationships between nodes
//!
//! Edges are logically undirected: an edge (A, B) is traversable B→A with
//! the same type and strength. The engine materializes both directions.

use crate::metadata::Metadata;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Type of relationship an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Colleagues, business partners, industry peers
    Professional,

    /// Friends and social connections
    Personal,

    /// Fellow board service
    Board,

    /// Family ties
    Family,

    /// Shared alma mater
    Alumni,

    /// Anything else
    Other,
}

impl EdgeType {
    /// Get the connection type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Professional => "professional",
            EdgeType::Personal => "personal",
            EdgeType::Board => "board",
            EdgeType::Family => "family",
            EdgeType::Alumni => "alumni",
            EdgeType::Other => "other",
        }
    }

    /// Parse a connection type from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "professional" => Some(EdgeType::Professional),
            "personal" => Some(EdgeType::Personal),
            "board" => Some(EdgeType::Board),
            "family" => Some(EdgeType::Family),
            "alumni" => Some(EdgeType::Alumni),
            "other" => Some(EdgeType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid connection type: {}", s))
    }
}

/// A weighted, typed connection between two node ids
///
/// `strength` is a 0-100 confidence/closeness score. Values above 100 are
/// representable here but rejected when a graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// One endpoint
    pub source: NodeId,

    /// The other endpoint
    pub target: NodeId,

    /// Relationship type
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Confidence/closeness of the relationship [0, 100]
    pub strength: u8,

    /// Opaque metadata, passed through untouched
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Edge {
    /// Create an edge with no metadata
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        edge_type: EdgeType,
        strength: u8,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
            strength,
            metadata: Metadata::new(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether the edge touches the given node id (either endpoint)
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// The endpoint opposite to `id`, or None if the edge does not touch it
    pub fn other_endpoint(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_type_roundtrip() {
        for t in [
            EdgeType::Professional,
            EdgeType::Personal,
            EdgeType::Board,
            EdgeType::Family,
            EdgeType::Alumni,
            EdgeType::Other,
        ] {
            assert_eq!(EdgeType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_edge_endpoints() {
        let edge = Edge::new("a", "b", EdgeType::Professional, 80);
        let a = NodeId::from("a");
        let b = NodeId::from("b");
        let c = NodeId::from("c");

        assert!(edge.touches(&a));
        assert!(edge.touches(&b));
        assert!(!edge.touches(&c));

        assert_eq!(edge.other_endpoint(&a), Some(&b));
        assert_eq!(edge.other_endpoint(&b), Some(&a));
        assert_eq!(edge.other_endpoint(&c), None);
    }

    #[test]
    fn test_edge_contract_shape() {
        // The wire contract names the relationship type field "type"
        let json = r#"{"source":"a","target":"b","type":"board","strength":60}"#;
        let edge: Edge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.edge_type, EdgeType::Board);
        assert_eq!(edge.strength, 60);

        let out = serde_json::to_string(&edge).unwrap();
        assert_eq!(out, json);
    }
}
