//! labelgraph
//!
//! A small in-memory directed, weighted graph whose vertices are named by
//! string labels.
//!
//! # Features
//!
//! - Edge insertion with lazy vertex creation (no self-loops, one edge per
//!   ordered pair)
//! - Depth-first and breadth-first traversal with visitor callbacks
//! - Single-source shortest paths (Dijkstra)
//! - Loading from the plain-text edge-list format
//!
//! ## Example Usage
//!
//! ```rust
//! use labelgraph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add("A", "B", 1);
//! graph.add("B", "C", 3);
//! graph.add("A", "C", 10);
//!
//! let mut order = Vec::new();
//! graph.depth_first_traversal("A", |label| order.push(label.to_string())).unwrap();
//! assert_eq!(order, vec!["A", "B", "C"]);
//!
//! let paths = graph.dijkstra_cost_to_all_vertices("A").unwrap();
//! assert_eq!(paths.cost("C"), Some(4));
//! assert_eq!(paths.to_string(), "B(1) C(4) via [B]");
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use algo::ShortestPaths;
pub use graph::{Edge, Graph, GraphError, GraphResult, Neighbors, Vertex, Weight};
pub use loader::{LoadConfig, LoadError, LoadMode, LoadResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
