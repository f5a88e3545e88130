//! Role module - the part a person plays in the donor network

use serde::{Deserialize, Serialize};

/// Role of a node in the relationship network
///
/// Roles are a closed set so that downstream scoring logic (introducer
/// multipliers in particular) can match exhaustively; adding a role is a
/// deliberate, compiler-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// An existing donor
    Donor,

    /// A prospective donor being researched
    Prospect,

    /// A member of the organization's board
    BoardMember,

    /// Organization staff
    Staff,

    /// A general contact with no other standing
    Contact,
}

impl NodeRole {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Donor => "donor",
            NodeRole::Prospect => "prospect",
            NodeRole::BoardMember => "board_member",
            NodeRole::Staff => "staff",
            NodeRole::Contact => "contact",
        }
    }

    /// Parse a role from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donor" => Some(NodeRole::Donor),
            "prospect" => Some(NodeRole::Prospect),
            "board_member" => Some(NodeRole::BoardMember),
            "staff" => Some(NodeRole::Staff),
            "contact" => Some(NodeRole::Contact),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid node role: {}", s))
    }
}
