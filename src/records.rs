// src/records.rs
//! Row types for the three Lahman source files.
//!
//! Field names follow the CSV headers (`playerID`, `teamID`, ...) via serde
//! renames; every other column in those files is ignored.

use serde::Deserialize;

/// One (player, team, season) appearance fact from `Appearances.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Appearance {
    #[serde(rename = "yearID")]
    pub year: u16,
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "playerID")]
    pub player_id: String,
}

impl Appearance {
    /// True when both ids survive trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.player_id.trim().is_empty() && !self.team_id.trim().is_empty()
    }
}

/// One person row from `People.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    #[serde(rename = "playerID")]
    pub player_id: String,
    /// Blank in the register for a handful of nineteenth-century players.
    #[serde(rename = "birthYear")]
    pub birth_year: Option<u16>,
    #[serde(rename = "nameFirst")]
    pub first: String,
    #[serde(rename = "nameLast")]
    pub last: String,
}

impl Person {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.player_id.trim().is_empty()
            && !self.first.trim().is_empty()
            && !self.last.trim().is_empty()
    }

    /// Full display name: trimmed first name, one space, trimmed last name.
    /// This is the exact form the resolver indexes and prompts expect.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first.trim(), self.last.trim())
    }
}

/// One team row from `Teams.csv`, carrying the display name for a team id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "name")]
    pub name: String,
}

impl Team {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.team_id.trim().is_empty() && !self.name.trim().is_empty()
    }
}
