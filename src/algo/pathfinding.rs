//! Pathfinding algorithms
//!
//! Single-source shortest paths with Dijkstra's algorithm. Weights are
//! assumed non-negative; a negative edge is skipped rather than relaxed.

use crate::graph::{Graph, GraphError, GraphResult, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt;
use tracing::{debug, warn};

/// Lowest known costs and predecessors from one source vertex
///
/// Only vertices reachable from the source (and not the source itself)
/// appear as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: String,
    costs: BTreeMap<String, Weight>,
    previous: BTreeMap<String, String>,
}

impl ShortestPaths {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Total cost of the cheapest path to `label`
    pub fn cost(&self, label: &str) -> Option<Weight> {
        self.costs.get(label).copied()
    }

    /// Vertex immediately before `label` on its cheapest path
    pub fn previous(&self, label: &str) -> Option<&str> {
        self.previous.get(label).map(String::as_str)
    }

    pub fn costs(&self) -> &BTreeMap<String, Weight> {
        &self.costs
    }

    pub fn predecessors(&self) -> &BTreeMap<String, String> {
        &self.previous
    }

    pub fn is_reachable(&self, label: &str) -> bool {
        label == self.source || self.costs.contains_key(label)
    }

    /// Number of reachable vertices, excluding the source
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Full path from the source to `label`, both ends included
    pub fn path_to(&self, label: &str) -> Option<Vec<String>> {
        if label == self.source {
            return Some(vec![self.source.clone()]);
        }
        if !self.costs.contains_key(label) {
            return None;
        }

        let mut path = vec![label.to_string()];
        let mut current = label;
        while current != self.source {
            current = self.previous.get(current).map(String::as_str)?;
            path.push(current.to_string());
        }
        path.reverse();
        Some(path)
    }

    /// Split into the `(costs, previous)` maps
    pub fn into_parts(self) -> (BTreeMap<String, Weight>, BTreeMap<String, String>) {
        (self.costs, self.previous)
    }
}

/// Renders `B(1) C(4) via [B]`: each reachable vertex with its cost, plus
/// the intermediate vertices when the path is not a direct edge.
impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, cost) in &self.costs {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}({})", label, cost)?;

            if let Some(path) = self.path_to(label) {
                if path.len() > 2 {
                    write!(f, " via [{}]", path[1..path.len() - 1].join(" "))?;
                }
            }
        }
        Ok(())
    }
}

/// State for Dijkstra priority queue
#[derive(Clone, PartialEq, Eq)]
struct State {
    cost: Weight,
    label: String,
}

// Rust's BinaryHeap is max-heap, so cost is reversed for min-heap behavior.
// On equal cost the larger label pops first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (weighted single-source shortest paths)
///
/// A vertex absent from the cost map has not been reached yet, so a genuine
/// zero-cost path is never mistaken for "unseen". Stale heap entries are
/// skipped once their vertex is settled.
pub fn dijkstra(graph: &Graph, source: &str) -> GraphResult<ShortestPaths> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound(source.to_string()));
    }

    let mut costs: BTreeMap<String, Weight> = BTreeMap::new();
    let mut previous: BTreeMap<String, String> = BTreeMap::new();
    let mut settled: BTreeSet<String> = BTreeSet::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0,
        label: source.to_string(),
    });

    while let Some(State { cost, label }) = heap.pop() {
        if settled.contains(&label) {
            continue;
        }
        let Some(vertex) = graph.find_vertex(&label) else {
            continue;
        };

        for edge in vertex.neighbors() {
            let next = edge.end_vertex();
            if next == source || settled.contains(next) {
                continue;
            }

            let weight = edge.weight();
            if weight < 0 {
                warn!("Skipping negative edge {} -> {} ({})", label, next, weight);
                continue;
            }

            let next_cost = cost.saturating_add(weight);
            let improves = costs.get(next).map_or(true, |&known| next_cost < known);
            if improves {
                costs.insert(next.to_string(), next_cost);
                previous.insert(next.to_string(), label.clone());
                heap.push(State {
                    cost: next_cost,
                    label: next.to_string(),
                });
            }
        }

        settled.insert(label);
    }

    debug!("Dijkstra from {} reached {} vertices", source, costs.len());
    Ok(ShortestPaths {
        source: source.to_string(),
        costs,
        previous,
    })
}
