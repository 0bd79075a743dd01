//! Core graph implementation
//!
//! This module implements the weighted digraph data model with:
//! - Vertices identified by unique string labels
//! - Directed, weighted edges owned by their source vertex
//! - At most one edge per ordered pair, no self-loops
//! - In-memory storage keyed by label

pub mod edge;
pub mod store;
pub mod vertex;

// Re-export main types
pub use edge::{Edge, Weight};
pub use store::{Graph, GraphError, GraphResult};
pub use vertex::{Neighbors, Vertex};
