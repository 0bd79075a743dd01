//! Edge implementation for the weighted digraph
//!
//! An edge only records where it goes and what it costs. The source side is
//! implied by the vertex that owns it.

use serde::{Deserialize, Serialize};

/// Edge weight type
///
/// Weights are signed so that edge-list files carrying negative numbers still
/// load, but shortest-path computation assumes they are non-negative.
pub type Weight = i64;

/// A directed, weighted edge owned by its source vertex
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Label of the vertex this edge points TO
    end_vertex: String,

    /// Cost of traversing this edge
    weight: Weight,
}

impl Edge {
    /// Create a new edge towards `end_vertex`
    pub fn new(end_vertex: impl Into<String>, weight: Weight) -> Self {
        Edge {
            end_vertex: end_vertex.into(),
            weight,
        }
    }

    /// Label of the destination vertex
    pub fn end_vertex(&self) -> &str {
        &self.end_vertex
    }

    /// Weight of the edge
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, label: &str) -> bool {
        self.end_vertex == label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edge() {
        let edge = Edge::default();
        assert_eq!(edge.end_vertex(), "");
        assert_eq!(edge.weight(), 0);
    }

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("A", 10);
        assert_eq!(edge.end_vertex(), "A");
        assert_eq!(edge.weight(), 10);
        assert!(edge.ends_at("A"));
        assert!(!edge.ends_at("a"));
    }

    #[test]
    fn test_edge_serializes_fields() {
        let edge = Edge::new("B", 7);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["end_vertex"], "B");
        assert_eq!(json["weight"], 7);
    }
}
