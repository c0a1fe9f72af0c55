// src/labels.rs
//! Display-name tables for rendering decoded paths.
//!
//! Rebuilt from the CSVs on every run; cheap enough that caching them
//! would buy nothing.

use std::collections::HashMap;

use crate::records::{Person, Team};

/// Player and team display names keyed by their ids.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    players: HashMap<String, String>,
    teams: HashMap<String, String>,
}

impl Labels {
    /// Builds both tables in one pass over each record set. A team id that
    /// appears in several rows (one per season) keeps the last name seen.
    #[must_use]
    pub fn build(people: &[Person], teams: &[Team]) -> Self {
        let players = people
            .iter()
            .map(|person| (person.player_id.clone(), person.full_name()))
            .collect();
        let teams = teams
            .iter()
            .map(|team| (team.team_id.clone(), team.name.clone()))
            .collect();
        Self { players, teams }
    }

    #[must_use]
    pub fn player(&self, id: &str) -> Option<&str> {
        self.players.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn team(&self, id: &str) -> Option<&str> {
        self.teams.get(id).map(String::as_str)
    }
}
