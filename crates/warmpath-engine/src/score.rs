//! Path scoring - strength metrics and the suggested-approach rule table
//!
//! The ranking score multiplies a path's total strength by
//! (weakest edge / 100). One weak link therefore sinks a path no matter
//! how strong the rest of the chain is: [90, 90] scores 162 while
//! [90, 90, 10] scores only 19. Compatible ranking depends on this exact
//! formula.

use warmpath_domain::{Edge, EdgeType, Node, WarmPath};

/// Aggregate strength metrics for one edge sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathScore {
    /// Raw sum of edge strengths
    pub total: u32,

    /// Mean edge strength
    pub average: f64,

    /// Strength of the weakest edge
    pub weakest: u8,

    /// Weak-link-penalized ranking score: `total * (weakest / 100)`
    pub score: f64,
}

/// Score an edge sequence
///
/// An empty sequence scores zero across the board (no path has zero edges,
/// but the scorer does not panic on one).
pub fn score_edges(edges: &[&Edge]) -> PathScore {
    if edges.is_empty() {
        return PathScore {
            total: 0,
            average: 0.0,
            weakest: 0,
            score: 0.0,
        };
    }

    let total: u32 = edges.iter().map(|e| e.strength as u32).sum();
    let weakest = edges.iter().map(|e| e.strength).min().unwrap_or(0);
    let average = total as f64 / edges.len() as f64;
    let score = total as f64 * (weakest as f64 / 100.0);

    PathScore {
        total,
        average,
        weakest,
        score,
    }
}

/// Distinct connection types along a path, in first-occurrence order
pub fn distinct_connection_types(edges: &[&Edge]) -> Vec<EdgeType> {
    let mut types = Vec::new();
    for edge in edges {
        if !types.contains(&edge.edge_type) {
            types.push(edge.edge_type);
        }
    }
    types
}

/// Generate the outreach suggestion for a path
///
/// Deterministic rule table, never an AI call: direct paths recommend
/// direct outreach; longer paths name the first intermediary, add a
/// credibility note keyed off the first distinct connection type, and
/// spell out the introduction count when more than one is needed.
pub fn suggested_approach(nodes: &[Node], connection_types: &[EdgeType]) -> String {
    if nodes.len() < 2 {
        return String::new();
    }

    if nodes.len() == 2 {
        return format!(
            "Direct outreach is recommended. You have an existing relationship with {}.",
            nodes[1].name
        );
    }

    let mut text = format!("Request an introduction through {}", nodes[1].name);
    match connection_types.first() {
        Some(EdgeType::Board) => text.push_str(" (board connection - high credibility)"),
        Some(EdgeType::Professional) => text.push_str(" (professional network)"),
        Some(EdgeType::Personal) => text.push_str(" (personal relationship - approach with care)"),
        _ => {}
    }

    let intermediaries = nodes.len() - 2;
    if intermediaries >= 2 {
        text.push_str(&format!(
            ". This path requires {} sequential introductions.",
            intermediaries
        ));
    }

    text
}

/// Assemble a scored `WarmPath` from resolved nodes and edges
pub fn build_warm_path(nodes: Vec<Node>, edges: &[&Edge]) -> WarmPath {
    let score = score_edges(edges);
    let connection_types = distinct_connection_types(edges);
    let suggested = suggested_approach(&nodes, &connection_types);

    WarmPath {
        path: nodes,
        total_strength: score.score,
        average_strength: score.average,
        weakest_link: score.weakest,
        connection_types,
        suggested_approach: suggested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warmpath_domain::NodeRole;

    fn edge(strength: u8, edge_type: EdgeType) -> Edge {
        Edge::new("x", "y", edge_type, strength)
    }

    fn node(name: &str) -> Node {
        Node::new(name.to_lowercase(), name, NodeRole::Contact)
    }

    #[test]
    fn test_weak_link_penalty() {
        let strong = [edge(90, EdgeType::Professional), edge(90, EdgeType::Professional)];
        let bottleneck = [
            edge(90, EdgeType::Professional),
            edge(90, EdgeType::Professional),
            edge(10, EdgeType::Professional),
        ];

        let strong_refs: Vec<&Edge> = strong.iter().collect();
        let bottleneck_refs: Vec<&Edge> = bottleneck.iter().collect();

        let s1 = score_edges(&strong_refs);
        let s2 = score_edges(&bottleneck_refs);

        // [90, 90]: total 180, min 90, score 162
        assert_eq!(s1.total, 180);
        assert!((s1.score - 162.0).abs() < 1e-9);

        // [90, 90, 10]: total 190, min 10, score 19
        assert_eq!(s2.total, 190);
        assert!((s2.score - 19.0).abs() < 1e-9);

        // Higher raw total, far lower rank
        assert!(s1.score > s2.score);
    }

    #[test]
    fn test_average_strength() {
        let edges = [edge(80, EdgeType::Personal), edge(70, EdgeType::Personal)];
        let refs: Vec<&Edge> = edges.iter().collect();
        let score = score_edges(&refs);
        assert!((score.average - 75.0).abs() < 1e-9);
        assert_eq!(score.weakest, 70);
    }

    #[test]
    fn test_empty_sequence_scores_zero() {
        let score = score_edges(&[]);
        assert_eq!(score.total, 0);
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_distinct_types_first_occurrence_order() {
        let edges = [
            edge(50, EdgeType::Personal),
            edge(50, EdgeType::Board),
            edge(50, EdgeType::Personal),
            edge(50, EdgeType::Alumni),
        ];
        let refs: Vec<&Edge> = edges.iter().collect();
        assert_eq!(
            distinct_connection_types(&refs),
            vec![EdgeType::Personal, EdgeType::Board, EdgeType::Alumni]
        );
    }

    #[test]
    fn test_direct_approach_text() {
        let text = suggested_approach(&[node("Me"), node("Dana Whitfield")], &[EdgeType::Personal]);
        assert_eq!(
            text,
            "Direct outreach is recommended. You have an existing relationship with Dana Whitfield."
        );
    }

    #[test]
    fn test_indirect_approach_board_note() {
        let text = suggested_approach(
            &[node("Me"), node("Sam Ortiz"), node("Dana Whitfield")],
            &[EdgeType::Board],
        );
        assert_eq!(
            text,
            "Request an introduction through Sam Ortiz (board connection - high credibility)"
        );
    }

    #[test]
    fn test_indirect_approach_no_note_for_family() {
        let text = suggested_approach(
            &[node("Me"), node("Sam Ortiz"), node("Dana Whitfield")],
            &[EdgeType::Family],
        );
        assert_eq!(text, "Request an introduction through Sam Ortiz");
    }

    #[test]
    fn test_multi_hop_introduction_count() {
        let text = suggested_approach(
            &[node("Me"), node("Sam Ortiz"), node("Lee Park"), node("Dana Whitfield")],
            &[EdgeType::Professional],
        );
        assert_eq!(
            text,
            "Request an introduction through Sam Ortiz (professional network). \
             This path requires 2 sequential introductions."
        );
    }
}
