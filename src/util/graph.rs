//! Weighted directed graph with single-source shortest paths.
//!
//! Nodes are plain `usize` identifiers; the path segmenter uses character
//! offsets. Edge weights must be non-negative, which lets
//! [`Graph::shortest_path`] use Dijkstra's label-setting algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::{AHashMap, AHashSet};

/// An outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: usize,
    pub weight: f64,
}

/// A shortest path from a source to a target node.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from source to target, inclusive.
    pub nodes: Vec<usize>,
    /// Sum of the edge weights along the path.
    pub cost: f64,
}

/// Heap entry ordered so that the smallest distance pops first.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; ties go to the lower node.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Adjacency-list graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: AHashMap<usize, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge. Both endpoints become nodes of the graph.
    ///
    /// Parallel edges are kept; the cheapest one wins during search.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        debug_assert!(weight >= 0.0, "negative edge weight {weight}");
        self.edges
            .entry(from)
            .or_default()
            .push(Edge { target: to, weight });
        self.edges.entry(to).or_default();
        self.edge_count += 1;
    }

    /// Outgoing edges of `node`.
    pub fn edges(&self, node: usize) -> &[Edge] {
        self.edges.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` appears in the graph.
    pub fn contains_node(&self, node: usize) -> bool {
        self.edges.contains_key(&node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Find the cheapest path from `source` to `target`.
    ///
    /// Returns `None` when `target` cannot be reached. A node always reaches
    /// itself at zero cost, provided it is part of the graph.
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<ShortestPath> {
        if !self.contains_node(source) {
            return None;
        }

        let mut distances: AHashMap<usize, f64> = AHashMap::new();
        let mut previous: AHashMap<usize, usize> = AHashMap::new();
        let mut visited: AHashSet<usize> = AHashSet::new();
        let mut heap = BinaryHeap::new();

        distances.insert(source, 0.0);
        heap.push(State {
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if !visited.insert(node) {
                continue;
            }
            if node == target {
                return Some(ShortestPath {
                    nodes: Self::reconstruct(&previous, source, target),
                    cost,
                });
            }

            for edge in self.edges(node) {
                if visited.contains(&edge.target) {
                    continue;
                }
                let next = cost + edge.weight;
                let improved = distances
                    .get(&edge.target)
                    .is_none_or(|&best| next < best);
                if improved {
                    distances.insert(edge.target, next);
                    previous.insert(edge.target, node);
                    heap.push(State {
                        cost: next,
                        node: edge.target,
                    });
                }
            }
        }

        None
    }

    fn reconstruct(previous: &AHashMap<usize, usize>, source: usize, target: usize) -> Vec<usize> {
        let mut nodes = vec![target];
        let mut current = target;
        while current != source {
            match previous.get(&current) {
                Some(&node) => {
                    nodes.push(node);
                    current = node;
                }
                None => break,
            }
        }
        nodes.reverse();
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_path_prefers_cheaper_route() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(0, 2, 0.25);

        let path = graph.shortest_path(0, 2).unwrap();
        assert_eq!(path.nodes, vec![0, 2]);
        assert_eq!(path.cost, 0.25);
    }

    #[test]
    fn test_multi_hop_path() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(2, 1, 1.0);
        graph.add_edge(1, 3, 1.0);

        let path = graph.shortest_path(0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 2, 1, 3]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn test_unreachable_target() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(2, 3, 1.0);

        assert!(graph.shortest_path(0, 3).is_none());
        assert!(graph.shortest_path(0, 9).is_none());
        assert!(graph.shortest_path(9, 0).is_none());
    }

    #[test]
    fn test_source_reaches_itself() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);

        let path = graph.shortest_path(0, 0).unwrap();
        assert_eq!(path.nodes, vec![0]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_counts() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 1, 0.5);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges(0).len(), 2);
        assert!(graph.edges(7).is_empty());
    }
}
