//! Vertex implementation for the weighted digraph
//!
//! A vertex owns its outgoing edges, keyed by destination label. Keys are kept
//! in a `BTreeMap` so neighbors always come back in ascending label order,
//! which is what makes traversal output deterministic.

use super::edge::{Edge, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

/// A labelled vertex and its outgoing edges
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    /// Unique label, fixed at construction
    label: String,

    /// Outgoing edges, one per destination
    #[serde(serialize_with = "serialize_edges")]
    neighbors: BTreeMap<String, Edge>,

    /// Traversal bookkeeping, not part of identity
    #[serde(skip)]
    visited: bool,
}

fn serialize_edges<S>(neighbors: &BTreeMap<String, Edge>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(neighbors.values())
}

impl Vertex {
    /// Create an unvisited vertex with no edges
    pub fn new(label: impl Into<String>) -> Self {
        Vertex {
            label: label.into(),
            neighbors: BTreeMap::new(),
            visited: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add an edge from this vertex to `end`
    ///
    /// Returns `false` without touching the adjacency when `end` is this
    /// vertex's own label or when an edge to `end` already exists. An existing
    /// edge keeps its original weight.
    pub fn connect(&mut self, end: &str, weight: Weight) -> bool {
        if end == self.label {
            return false;
        }
        match self.neighbors.entry(end.to_string()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Edge::new(end, weight));
                true
            }
        }
    }

    /// Remove the edge to `end`, returning whether one was removed
    pub fn disconnect(&mut self, end: &str) -> bool {
        self.neighbors.remove(end).is_some()
    }

    /// Weight of the edge to `end`, if there is one
    pub fn edge_weight(&self, end: &str) -> Option<Weight> {
        self.neighbors.get(end).map(Edge::weight)
    }

    pub fn has_neighbor(&self, end: &str) -> bool {
        self.neighbors.contains_key(end)
    }

    pub fn number_of_neighbors(&self) -> usize {
        self.neighbors.len()
    }

    /// Outgoing edges in ascending destination order
    ///
    /// Every call starts from the first neighbor, and the sequence ends after
    /// the last one.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            inner: self.neighbors.values(),
        }
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn unvisit(&mut self) {
        self.visited = false;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

/// Iterator over a vertex's outgoing edges, see [`Vertex::neighbors`]
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: btree_map::Values<'a, String, Edge>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
