// src/graph/node.rs
//! Node keys for the bipartite roster graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the roster graph: either a player or one team's season.
///
/// Team identity is scoped to a single season. `(team, year)` is the key,
/// never the team id alone, so two players on the same franchise in
/// different years share no edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A player, keyed by the stable Lahman player id.
    Player { id: String },
    /// One team's roster for one season.
    TeamSeason { team: String, year: u16 },
}

impl Node {
    #[must_use]
    pub fn player(id: impl Into<String>) -> Self {
        Node::Player { id: id.into() }
    }

    #[must_use]
    pub fn team_season(team: impl Into<String>, year: u16) -> Self {
        Node::TeamSeason {
            team: team.into(),
            year,
        }
    }

    /// True for player nodes.
    #[must_use]
    pub fn is_player(&self) -> bool {
        matches!(self, Node::Player { .. })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Player { id } => write!(f, "player:{id}"),
            Node::TeamSeason { team, year } => write!(f, "team:{team}-{year}"),
        }
    }
}
