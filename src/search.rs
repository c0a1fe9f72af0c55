// src/search.rs
//! Unweighted single-source shortest paths over the roster graph.
//!
//! Search results live outside the graph. One immutable graph serves any
//! number of queries, and a state is built per start node then dropped
//! when its queries are done, so there is no per-node search bookkeeping
//! to reset between runs.

use std::collections::{HashMap, VecDeque};

use crate::graph::{Node, RosterGraph};

/// Distances and predecessor tree produced by one search.
#[derive(Debug, Clone)]
pub struct SearchState {
    start: Node,
    distances: HashMap<Node, u32>,
    predecessors: HashMap<Node, Node>,
}

impl SearchState {
    /// The node this search ran from.
    #[must_use]
    pub fn start(&self) -> &Node {
        &self.start
    }

    /// True once the search reached the node. The start itself always
    /// counts as reached.
    #[must_use]
    pub fn visited(&self, node: &Node) -> bool {
        self.distances.contains_key(node)
    }

    /// Hop count from the start, if reached.
    #[must_use]
    pub fn distance(&self, node: &Node) -> Option<u32> {
        self.distances.get(node).copied()
    }

    /// The node the search arrived from. None for the start and for nodes
    /// the search never reached.
    #[must_use]
    pub fn predecessor(&self, node: &Node) -> Option<&Node> {
        self.predecessors.get(node)
    }

    /// Number of nodes reached, start included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.distances.len()
    }
}

/// Breadth-first search from `start` across its whole component.
///
/// Neighbors are scanned in adjacency insertion order, so between
/// equal-length paths the one whose edges were ingested first wins. A
/// start absent from the graph still comes back visited at distance 0
/// with nothing else reached.
#[must_use]
pub fn search(graph: &RosterGraph, start: Node) -> SearchState {
    let mut distances = HashMap::new();
    let mut predecessors = HashMap::new();
    let mut queue: VecDeque<(Node, u32)> = VecDeque::new();

    distances.insert(start.clone(), 0);
    queue.push_back((start.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor.clone(), depth + 1);
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back((neighbor.clone(), depth + 1));
            }
        }
    }

    SearchState {
        start,
        distances,
        predecessors,
    }
}
