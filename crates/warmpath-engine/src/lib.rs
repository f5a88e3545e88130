//! Warmpath Engine
//!
//! In-memory relationship-graph algorithms for donor networks:
//!
//! - **Warm-path discovery**: enumerate and rank chains of introduction
//!   between two people, bounded by depth and a strength floor, scored
//!   with a weak-link penalty
//! - **Introducer ranking**: score the people directly connected to a
//!   prospect by relationship strength, type, and role
//! - **Network centrality**: normalized 0-100 connectedness per node
//!
//! Every query is a pure, synchronous computation over caller-supplied
//! data: the graph is rebuilt per request, nothing is persisted, and
//! concurrent queries share no state.
//!
//! # Examples
//!
//! ```
//! use warmpath_domain::{Edge, EdgeType, Node, NodeRole};
//! use warmpath_engine::{discover_warm_paths, DiscoveryOptions};
//!
//! let nodes = vec![
//!     Node::new("me", "Jordan Lee", NodeRole::Staff),
//!     Node::new("sam", "Sam Ortiz", NodeRole::BoardMember),
//!     Node::new("dana", "Dana Whitfield", NodeRole::Prospect),
//! ];
//! let edges = vec![
//!     Edge::new("me", "sam", EdgeType::Board, 85),
//!     Edge::new("sam", "dana", EdgeType::Professional, 70),
//! ];
//!
//! let result = discover_warm_paths(
//!     nodes,
//!     edges,
//!     &"me".into(),
//!     &"dana".into(),
//!     &DiscoveryOptions::default(),
//! ).unwrap();
//!
//! assert!(result.best_path.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod centrality;
pub mod config;
pub mod discover;
pub mod error;
pub mod graph;
pub mod introducers;
pub mod score;
mod search;

pub use centrality::{calculate_network_centrality, centrality_on_graph};
pub use config::{DiscoveryOptions, IntroducerOptions};
pub use discover::{discover_on_graph, discover_warm_paths};
pub use error::EngineError;
pub use graph::RelationshipGraph;
pub use introducers::{find_best_introducers, rank_introducers_on_graph, RankedIntroducer};
pub use score::{score_edges, PathScore};
