//! In-memory graph storage implementation
//!
//! The graph is the sole owner of every vertex. Vertices are keyed by label in
//! a `BTreeMap`, and nothing outside this module ever gets a mutable handle on
//! one, so the cached vertex/edge counters cannot drift from the map contents.

use super::edge::Weight;
use super::vertex::Vertex;
use crate::algo::{self, ShortestPaths};
use crate::loader::{self, LoadConfig, LoadResult};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed, weighted graph
///
/// - vertices: label -> Vertex (each vertex holds its outgoing edges)
/// - vertex_count / edge_count: cached totals, kept in step by `add`
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// Vertex registry
    #[serde(serialize_with = "serialize_vertices")]
    vertices: BTreeMap<String, Vertex>,

    /// Number of registered vertices
    vertex_count: usize,

    /// Number of edges across all vertices
    edge_count: usize,
}

fn serialize_vertices<S>(vertices: &BTreeMap<String, Vertex>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(vertices.values())
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph::default()
    }

    /// Add a directed edge from `start` to `end`
    ///
    /// Missing vertices are created, but they are only registered once the
    /// edge itself is accepted: a rejected edge leaves the graph untouched.
    /// Returns `false` for self-loops and for an edge that already exists.
    pub fn add(&mut self, start: &str, end: &str, weight: Weight) -> bool {
        if start == end {
            debug!("Rejected self-loop on {}", start);
            return false;
        }

        let connected = match self.vertices.get_mut(start) {
            Some(vertex) => vertex.connect(end, weight),
            None => {
                let mut vertex = Vertex::new(start);
                let connected = vertex.connect(end, weight);
                if connected {
                    self.vertices.insert(start.to_string(), vertex);
                    self.vertex_count += 1;
                }
                connected
            }
        };

        if !connected {
            debug!("Rejected duplicate edge {} -> {}", start, end);
            return false;
        }

        if !self.vertices.contains_key(end) {
            self.vertices.insert(end.to_string(), Vertex::new(end));
            self.vertex_count += 1;
        }
        self.edge_count += 1;
        true
    }

    /// Weight of the edge from `start` to `end`
    ///
    /// `None` when either vertex is unknown or they are not connected in that
    /// direction.
    pub fn edge_weight(&self, start: &str, end: &str) -> Option<Weight> {
        self.find_vertex(start)?.edge_weight(end)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Look up a vertex without creating it
    pub fn find_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// Look up a vertex, building a fresh one if it is unknown
    ///
    /// The fresh vertex is handed back by value and is NOT registered; only
    /// `add` registers vertices.
    pub fn find_or_create_vertex(&self, label: &str) -> Cow<'_, Vertex> {
        match self.vertices.get(label) {
            Some(vertex) => Cow::Borrowed(vertex),
            None => Cow::Owned(Vertex::new(label)),
        }
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// All vertices in ascending label order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// All labels in ascending order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// Mark every vertex as not visited
    pub fn unvisit_vertices(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.unvisit();
        }
    }

    /// Mutable access for traversal bookkeeping only
    pub(crate) fn vertex_mut(&mut self, label: &str) -> Option<&mut Vertex> {
        self.vertices.get_mut(label)
    }

    /// Depth-first traversal from `start`, calling `visit` on each label
    pub fn depth_first_traversal<F>(&mut self, start: &str, visit: F) -> GraphResult<()>
    where
        F: FnMut(&str),
    {
        algo::depth_first(self, start, visit)
    }

    /// Breadth-first traversal from `start`, calling `visit` on each label
    pub fn breadth_first_traversal<F>(&mut self, start: &str, visit: F) -> GraphResult<()>
    where
        F: FnMut(&str),
    {
        algo::breadth_first(self, start, visit)
    }

    /// Lowest cost from `start` to every vertex it can reach
    pub fn dijkstra_cost_to_all_vertices(&self, start: &str) -> GraphResult<ShortestPaths> {
        algo::dijkstra(self, start)
    }

    /// Same as [`Graph::dijkstra_cost_to_all_vertices`], filling caller-owned maps
    ///
    /// Both maps are cleared first. `weight["F"] = 10` means F costs 10 to
    /// reach; `previous["F"] = "C"` means F is reached via C.
    pub fn dijkstra_into(
        &self,
        start: &str,
        weight: &mut BTreeMap<String, Weight>,
        previous: &mut BTreeMap<String, String>,
    ) -> GraphResult<()> {
        weight.clear();
        previous.clear();
        let paths = algo::dijkstra(self, start)?;
        let (costs, predecessors) = paths.into_parts();
        *weight = costs;
        *previous = predecessors;
        Ok(())
    }

    /// Best-effort load of an edge-list file
    ///
    /// A missing or unreadable file adds nothing. Returns the number of edges
    /// added.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> usize {
        // Best-effort mode never surfaces an error
        self.load_file(path, &LoadConfig::default()).unwrap_or(0)
    }

    /// Load an edge-list file according to `config`
    pub fn load_file(&mut self, path: impl AsRef<Path>, config: &LoadConfig) -> LoadResult<usize> {
        loader::load_file(self, path.as_ref(), config)
    }

    /// Load edges from any buffered reader
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R, config: &LoadConfig) -> LoadResult<usize> {
        loader::load_reader(self, reader, config)
    }

    /// Load edges from an in-memory edge list
    pub fn load_from_str(&mut self, input: &str, config: &LoadConfig) -> LoadResult<usize> {
        loader::load_str(self, input, config)
    }

    /// Build a graph from `(start, end, weight)` triples, skipping rejected edges
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut graph = Graph::new();
        for (start, end, weight) in edges {
            graph.add(start, end, weight);
        }
        graph
    }
}
