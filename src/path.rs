// src/path.rs
//! Decoding predecessor trees into start-to-end paths.

use crate::error::{Result, ShortstopError};
use crate::graph::Node;
use crate::labels::Labels;
use crate::search::SearchState;

/// One shortest path. Position 0 is the search start, the last position
/// is the requested end; players and team-seasons alternate because the
/// graph is bipartite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// Nodes from start to end.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Length in edges.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The player ids along the path, start first.
    #[must_use]
    pub fn players(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Player { id } => Some(id.as_str()),
                Node::TeamSeason { .. } => None,
            })
            .collect()
    }

    /// Display labels for every node in path order: the player's full name
    /// for player nodes, `"<Team>, <year>"` for team-seasons. Ids missing
    /// from the label tables fall back to the raw id, so rendering never
    /// fails.
    #[must_use]
    pub fn render(&self, labels: &Labels) -> Vec<String> {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Player { id } => labels.player(id).unwrap_or(id).to_string(),
                Node::TeamSeason { team, year } => {
                    let name = labels.team(team).unwrap_or(team);
                    format!("{name}, {year}")
                }
            })
            .collect()
    }
}

/// Recovers the shortest path to `end` by walking predecessor links back
/// to the start, then reversing.
///
/// # Errors
/// `Unreachable` when the search never visited `end`.
pub fn decode(state: &SearchState, end: &Node) -> Result<Path> {
    if !state.visited(end) {
        return Err(ShortstopError::Unreachable {
            start: state.start().to_string(),
            end: end.to_string(),
        });
    }

    let mut nodes = vec![end.clone()];
    let mut current = end;
    while let Some(previous) = state.predecessor(current) {
        nodes.push(previous.clone());
        current = previous;
    }
    nodes.reverse();
    Ok(Path { nodes })
}
