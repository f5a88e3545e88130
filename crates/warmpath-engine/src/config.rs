//! Query option structs

use warmpath_domain::EdgeType;

/// Default maximum number of edges in a discovered path
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Default strength floor; weaker edges are not traversed
pub const DEFAULT_MIN_STRENGTH: u8 = 20;

/// Default cap on the number of ranked paths returned
pub const DEFAULT_MAX_PATHS: usize = 5;

/// Default explored-state budget for one search
pub const DEFAULT_MAX_STATES: usize = 250_000;

/// Options for warm-path discovery
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Maximum number of edges in a path
    pub max_depth: usize,

    /// Edges below this strength are not traversable
    pub min_strength: u8,

    /// Maximum number of ranked paths to return
    pub max_paths: usize,

    /// Hard cap on BFS states enqueued before the search fails with
    /// `ResourceExhausted`; guards against combinatorial blowup on dense
    /// graphs
    pub max_states: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_strength: DEFAULT_MIN_STRENGTH,
            max_paths: DEFAULT_MAX_PATHS,
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

impl DiscoveryOptions {
    /// A wider search: deeper paths, no strength floor, more results
    pub fn exhaustive() -> Self {
        Self {
            max_depth: 6,
            min_strength: 0,
            max_paths: 25,
            max_states: DEFAULT_MAX_STATES,
        }
    }

    /// A narrower search: short paths through strong relationships only
    pub fn conservative() -> Self {
        Self {
            max_depth: 3,
            min_strength: 40,
            max_paths: 3,
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

/// Options for introducer ranking
#[derive(Debug, Clone)]
pub struct IntroducerOptions {
    /// Edges below this strength are not considered
    pub min_strength: u8,

    /// Connection types whose edges get the preferred-type boost
    pub preferred_types: Vec<EdgeType>,
}

impl Default for IntroducerOptions {
    fn default() -> Self {
        Self {
            min_strength: 30,
            preferred_types: vec![EdgeType::Board, EdgeType::Professional],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_discovery_options() {
        let options = DiscoveryOptions::default();
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.min_strength, 20);
        assert_eq!(options.max_paths, 5);
        assert!(options.max_states > 0);
    }

    #[test]
    fn test_exhaustive_removes_strength_floor() {
        let options = DiscoveryOptions::exhaustive();
        assert_eq!(options.min_strength, 0);
        assert!(options.max_depth > DiscoveryOptions::default().max_depth);
    }

    #[test]
    fn test_default_introducer_options() {
        let options = IntroducerOptions::default();
        assert_eq!(options.min_strength, 30);
        assert_eq!(
            options.preferred_types,
            vec![EdgeType::Board, EdgeType::Professional]
        );
    }
}
