// src/graph/store.rs
//! The roster graph: undirected bipartite adjacency over players and
//! team-seasons.
//!
//! Neighbor lists keep insertion order. Search tie-breaking therefore
//! follows the order appearance records were ingested, which makes query
//! output reproducible for a given source file.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortstopError};

use super::node::Node;

#[derive(Debug, Clone, Default)]
pub struct RosterGraph {
    adjacency: HashMap<Node, Vec<Node>>,
    edges: HashSet<(Node, Node)>,
}

impl RosterGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the undirected edge between a player and a team-season.
    /// Re-inserting an existing edge is a no-op, so duplicate appearance
    /// rows collapse into one edge.
    ///
    /// Callers pass one player and one team-season; `validate` is the
    /// enforcement point for graphs that arrive from the cache.
    pub fn link(&mut self, player: Node, team_season: Node) {
        self.insert_directed(player.clone(), team_season.clone());
        self.insert_directed(team_season, player);
    }

    fn insert_directed(&mut self, from: Node, to: Node) {
        if self.edges.insert((from.clone(), to.clone())) {
            self.adjacency.entry(from).or_default().push(to);
        }
    }

    /// Neighbors in insertion order. Unknown nodes have no neighbors.
    #[must_use]
    pub fn neighbors(&self, node: &Node) -> &[Node] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edge count.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.adjacency.keys()
    }

    /// Checks the structural invariants: every edge joins a player to a
    /// team-season, and every neighbor link is mirrored.
    ///
    /// # Errors
    /// `Invariant` naming the first offending edge.
    pub fn validate(&self) -> Result<()> {
        for (node, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                if node.is_player() == neighbor.is_player() {
                    return Err(ShortstopError::Invariant(format!(
                        "edge {node} -> {neighbor} joins two nodes of the same kind"
                    )));
                }
                if !self.edges.contains(&(neighbor.clone(), node.clone())) {
                    return Err(ShortstopError::Invariant(format!(
                        "edge {node} -> {neighbor} has no mirror"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serializable form for the cache layer. Neighbor order survives the
    /// round trip.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .adjacency
                .iter()
                .map(|(node, neighbors)| NodeAdjacency {
                    node: node.clone(),
                    neighbors: neighbors.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a graph from a snapshot, re-checking the invariants a
    /// freshly built graph guarantees by construction.
    ///
    /// # Errors
    /// `Invariant` when the snapshot encodes a same-kind or one-way edge.
    pub fn restore(snapshot: GraphSnapshot) -> Result<Self> {
        let mut graph = Self::new();
        for entry in snapshot.nodes {
            for neighbor in entry.neighbors {
                graph.insert_directed(entry.node.clone(), neighbor);
            }
        }
        graph.validate()?;
        Ok(graph)
    }
}

/// Flat adjacency listing, the JSON form of a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeAdjacency>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeAdjacency {
    pub node: Node,
    pub neighbors: Vec<Node>,
}
