//! Graph traversal algorithms
//!
//! Depth-first and breadth-first walks that report each reached vertex to a
//! visitor callback. Both use the vertices' own visited flags, which are
//! cleared before every walk so repeated traversals start fresh.

use crate::graph::{Graph, GraphError, GraphResult, Vertex};
use std::collections::VecDeque;
use tracing::debug;

fn require_vertex(graph: &Graph, start: &str) -> GraphResult<()> {
    if graph.contains_vertex(start) {
        Ok(())
    } else {
        Err(GraphError::VertexNotFound(start.to_string()))
    }
}

fn neighbor_labels(vertex: &Vertex) -> impl DoubleEndedIterator<Item = String> + '_ {
    vertex.neighbors().map(|edge| edge.end_vertex().to_string())
}

fn is_unvisited(graph: &Graph, label: &str) -> bool {
    graph.find_vertex(label).is_some_and(|vertex| !vertex.is_visited())
}

/// Pre-order depth-first traversal
///
/// Neighbors are explored in ascending label order. The walk keeps its own
/// stack instead of recursing, with the same visit order as the recursive
/// formulation.
pub fn depth_first<F>(graph: &mut Graph, start: &str, mut visit: F) -> GraphResult<()>
where
    F: FnMut(&str),
{
    require_vertex(graph, start)?;
    graph.unvisit_vertices();

    let mut stack = vec![start.to_string()];
    let mut reached = 0usize;

    while let Some(label) = stack.pop() {
        let Some(vertex) = graph.vertex_mut(&label) else {
            continue;
        };
        if vertex.is_visited() {
            continue;
        }
        vertex.visit();
        visit(label.as_str());
        reached += 1;

        // Push in reverse so the smallest label is popped first
        let pending: Vec<String> = neighbor_labels(vertex).rev().collect();
        for next in pending {
            if is_unvisited(graph, &next) {
                stack.push(next);
            }
        }
    }

    debug!("Depth-first traversal from {} reached {} vertices", start, reached);
    Ok(())
}

/// Breadth-first traversal
///
/// Vertices are marked when discovered, not when dequeued, so each one is
/// visited and enqueued at most once.
pub fn breadth_first<F>(graph: &mut Graph, start: &str, mut visit: F) -> GraphResult<()>
where
    F: FnMut(&str),
{
    require_vertex(graph, start)?;
    graph.unvisit_vertices();

    let mut queue = VecDeque::new();
    if let Some(vertex) = graph.vertex_mut(start) {
        vertex.visit();
    }
    visit(start);
    queue.push_back(start.to_string());
    let mut reached = 1usize;

    while let Some(label) = queue.pop_front() {
        let discovered: Vec<String> = match graph.find_vertex(&label) {
            Some(vertex) => neighbor_labels(vertex).collect(),
            None => continue,
        };

        for next in discovered {
            let Some(vertex) = graph.vertex_mut(&next) else {
                continue;
            };
            if vertex.is_visited() {
                continue;
            }
            vertex.visit();
            visit(next.as_str());
            reached += 1;
            queue.push_back(next);
        }
    }

    debug!("Breadth-first traversal from {} reached {} vertices", start, reached);
    Ok(())
}

/// Labels in depth-first order
pub fn depth_first_order(graph: &mut Graph, start: &str) -> GraphResult<Vec<String>> {
    let mut order = Vec::new();
    depth_first(graph, start, |label| order.push(label.to_string()))?;
    Ok(order)
}

/// Labels in breadth-first order
pub fn breadth_first_order(graph: &mut Graph, start: &str) -> GraphResult<Vec<String>> {
    let mut order = Vec::new();
    breadth_first(graph, start, |label| order.push(label.to_string()))?;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        // 1 -> 2 -> 3, 1 -> 3
        Graph::from_edges([("1", "2", 1), ("2", "3", 1), ("1", "3", 1)])
    }

    #[test]
    fn test_depth_first() {
        let mut graph = Graph::from_edges([("A", "C", 1), ("A", "B", 1), ("B", "D", 1), ("C", "E", 1)]);
        assert_eq!(depth_first_order(&mut graph, "A").unwrap(), vec!["A", "B", "D", "C", "E"]);
    }

    #[test]
    fn test_breadth_first() {
        let mut graph = Graph::from_edges([("A", "C", 1), ("A", "B", 1), ("B", "D", 1), ("C", "E", 1)]);
        assert_eq!(breadth_first_order(&mut graph, "A").unwrap(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_cycle_visits_each_vertex_once() {
        let mut graph = Graph::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        assert_eq!(depth_first_order(&mut graph, "B").unwrap(), vec!["B", "C", "A"]);
        assert_eq!(breadth_first_order(&mut graph, "B").unwrap(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_isolated_vertex() {
        let mut graph = chain();
        assert_eq!(depth_first_order(&mut graph, "3").unwrap(), vec!["3"]);
        assert_eq!(breadth_first_order(&mut graph, "3").unwrap(), vec!["3"]);
    }

    #[test]
    fn test_repeated_traversal_is_stable() {
        let mut graph = chain();
        let first = depth_first_order(&mut graph, "1").unwrap();
        let second = depth_first_order(&mut graph, "1").unwrap();
        assert_eq!(first, second);
        let third = breadth_first_order(&mut graph, "1").unwrap();
        assert_eq!(third, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unknown_start() {
        let mut graph = chain();
        let mut calls = 0;
        let err = depth_first(&mut graph, "9", |_| calls += 1).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("9".to_string()));
        let err = breadth_first(&mut graph, "9", |_| calls += 1).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("9".to_string()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let labels: Vec<String> = (0..50_000).map(|i| format!("v{:05}", i)).collect();
        let mut graph = Graph::new();
        for pair in labels.windows(2) {
            graph.add(&pair[0], &pair[1], 1);
        }
        let order = depth_first_order(&mut graph, "v00000").unwrap();
        assert_eq!(order.len(), labels.len());
        assert_eq!(order.last().map(String::as_str), Some("v49999"));
    }
}
