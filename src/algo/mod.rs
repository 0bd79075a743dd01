//! Graph algorithms module
//!
//! Traversals walk the graph in place, using the vertices' visited flags.
//! Pathfinding only reads the graph and returns its own result maps.

pub mod pathfinding;
pub mod traversal;

pub use pathfinding::{dijkstra, ShortestPaths};
pub use traversal::{breadth_first, breadth_first_order, depth_first, depth_first_order};
