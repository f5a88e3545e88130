//! Node module - people and entities in the relationship network

use crate::metadata::Metadata;
use crate::role::NodeRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a node in the relationship network
///
/// Ids are caller-supplied opaque strings (typically the host application's
/// CRM record ids). They are stable within one query invocation; no identity
/// is guaranteed across calls.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person or entity in the relationship network
///
/// Nodes are immutable value objects built fresh from caller data for each
/// query and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier, stable across one query
    pub id: NodeId,

    /// Display name
    pub name: String,

    /// Role in the donor network
    pub role: NodeRole,

    /// Optional base connection-strength hint; not used by the core
    /// algorithms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_strength: Option<u8>,

    /// Opaque metadata, passed through untouched
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl Node {
    /// Create a node with no strength hint or metadata
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, role: NodeRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            connection_strength: None,
            metadata: Metadata::new(),
        }
    }

    /// Attach a base connection-strength hint
    pub fn with_connection_strength(mut self, strength: u8) -> Self {
        self.connection_strength = Some(strength);
        self
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        let id = NodeId::new("donor-17");
        assert_eq!(id.to_string(), "donor-17");
        assert_eq!(id.as_str(), "donor-17");
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new("n1", "Alice Chen", NodeRole::Donor).with_connection_strength(85);
        assert_eq!(node.id, NodeId::from("n1"));
        assert_eq!(node.connection_strength, Some(85));
        assert!(node.metadata.is_empty());
    }

    #[test]
    fn test_node_contract_shape() {
        // Optional fields may be omitted entirely on the wire
        let json = r#"{"id":"n1","name":"Alice Chen","role":"donor"}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.role, NodeRole::Donor);
        assert_eq!(node.connection_strength, None);

        let out = serde_json::to_string(&node).unwrap();
        assert_eq!(out, json);
    }

    #[test]
    fn test_node_connection_strength_camel_case() {
        let json = r#"{"id":"n1","name":"Alice","role":"staff","connectionStrength":40}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.connection_strength, Some(40));
    }
}
