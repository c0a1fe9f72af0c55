// src/graph/builder.rs
//! Graph construction from appearance records.

use crate::records::Appearance;

use super::node::Node;
use super::store::RosterGraph;

/// Builds the roster graph in one pass over the appearance records.
///
/// Every record contributes the undirected edge between its player and its
/// team-season; nothing else is derived. A player who suits up for two
/// teams in one season gets two edges, and a repeated (player, team, year)
/// row collapses into one.
#[must_use]
pub fn from_appearances(appearances: &[Appearance]) -> RosterGraph {
    let mut graph = RosterGraph::new();
    for row in appearances {
        graph.link(
            Node::player(row.player_id.clone()),
            Node::team_season(row.team_id.clone(), row.year),
        );
    }
    graph
}
