//! Warmpath Domain Layer
//!
//! This crate contains the domain model for the warm-path discovery engine:
//! the people, relationships, and result records that the algorithms in
//! `warmpath-engine` operate on.
//!
//! ## Key Concepts
//!
//! - **Node**: a person/entity in the relationship network
//! - **Edge**: a weighted, typed connection between two nodes, traversable
//!   in both directions
//! - **Warm path**: a scored chain of introductions between two people
//! - **Metadata**: opaque key-value bags carried through untouched
//!
//! ## Architecture
//!
//! All types here are plain value objects. They are constructed fresh from
//! caller-supplied data for each query, never mutated by the algorithms,
//! and discarded when the query completes. The serde shapes double as the
//! caller-facing data contract (camelCase field names).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod metadata;
pub mod node;
pub mod path;
pub mod role;

// Re-exports for convenience
pub use edge::{Edge, EdgeType};
pub use metadata::{MetaValue, Metadata};
pub use node::{Node, NodeId};
pub use path::{WarmPath, WarmPathResult};
pub use role::NodeRole;
