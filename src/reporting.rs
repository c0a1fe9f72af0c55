// src/reporting.rs
//! Console rendering for paths, candidate lists and biography links.
//!
//! Everything here builds strings; the interactive loop and the command
//! handlers decide where they go. That keeps rendering testable without
//! capturing stdout.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;

use crate::dataset::Assembly;
use crate::labels::Labels;
use crate::path::Path;
use crate::resolve::Candidate;

/// Biography page for a player id, in the baseball-reference URL scheme:
/// first letter of the id as the shard directory.
#[must_use]
pub fn bio_url(player_id: &str) -> String {
    player_id.chars().next().map_or_else(String::new, |initial| {
        format!("https://www.baseball-reference.com/players/{initial}/{player_id}.shtml")
    })
}

/// Renders a player-to-player path as an indented chain, players on the
/// outside, the team-season they shared between them.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_path(path: &Path, labels: &Labels) -> Result<String> {
    let mut out = String::new();
    let hops = path.hops();
    writeln!(
        out,
        "{}",
        format!("Connected in {hops} {}:", pluralize("hop", hops)).bold()
    )?;
    for (i, label) in path.render(labels).iter().enumerate() {
        if i % 2 == 0 {
            writeln!(out, "  {}", label.cyan())?;
        } else {
            writeln!(out, "   {} {}", "via".blue(), label.dimmed())?;
        }
    }
    Ok(out)
}

/// Numbered candidate list for a duplicate name, one line per identity.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_candidates(name: &str, candidates: &[Candidate]) -> Result<String> {
    let mut out = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        match candidate.birth_year {
            Some(year) => writeln!(out, "  {}: {name} born in {year}", i + 1)?,
            None => writeln!(out, "  {}: {name} (birth year unknown)", i + 1)?,
        }
    }
    Ok(out)
}

/// Numbered list of the players along a path, for the biography pick.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_roster(path: &Path, labels: &Labels) -> Result<String> {
    let mut out = String::new();
    for (i, id) in path.players().iter().enumerate() {
        let name = labels.player(id).unwrap_or(id);
        writeln!(out, "{}. {name}", i + 1)?;
    }
    Ok(out)
}

/// Assembly statistics for verbose mode.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_assembly(assembly: &Assembly) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", provenance_line("graph", assembly.graph_cached).dimmed())?;
    writeln!(out, "{}", provenance_line("names", assembly.names_cached).dimmed())?;
    if assembly.skipped > 0 {
        writeln!(
            out,
            "{}",
            format!(
                "skipped {} malformed {}",
                assembly.skipped,
                pluralize("row", assembly.skipped)
            )
            .yellow()
        )?;
    }
    for warning in &assembly.warnings {
        writeln!(out, "{} {warning}", "warning:".yellow().bold())?;
    }
    Ok(out)
}

fn provenance_line(what: &str, cached: bool) -> String {
    if cached {
        format!("{what}: cache hit")
    } else {
        format!("{what}: rebuilt from CSV")
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{builder, Node};
    use crate::records::{Appearance, Person, Team};
    use crate::{path, search};

    fn fixture() -> (Path, Labels) {
        let appearances = vec![
            Appearance {
                year: 1954,
                team_id: "ML1".to_string(),
                player_id: "aaronha01".to_string(),
            },
            Appearance {
                year: 1954,
                team_id: "ML1".to_string(),
                player_id: "mathied01".to_string(),
            },
        ];
        let people = vec![
            Person {
                player_id: "aaronha01".to_string(),
                birth_year: Some(1934),
                first: "Hank".to_string(),
                last: "Aaron".to_string(),
            },
            Person {
                player_id: "mathied01".to_string(),
                birth_year: Some(1931),
                first: "Eddie".to_string(),
                last: "Mathews".to_string(),
            },
        ];
        let teams = vec![Team {
            team_id: "ML1".to_string(),
            name: "Milwaukee Braves".to_string(),
        }];

        let graph = builder::from_appearances(&appearances);
        let state = search::search(&graph, Node::player("aaronha01"));
        let found = path::decode(&state, &Node::player("mathied01")).unwrap();
        (found, Labels::build(&people, &teams))
    }

    #[test]
    fn bio_url_shards_by_first_letter() {
        assert_eq!(
            bio_url("aaronha01"),
            "https://www.baseball-reference.com/players/a/aaronha01.shtml"
        );
        assert_eq!(bio_url(""), "");
    }

    #[test]
    fn path_chain_alternates_players_and_teams() {
        let (found, labels) = fixture();
        let rendered = render_path(&found, &labels).unwrap();
        assert!(rendered.contains("Connected in 2 hops:"));
        assert!(rendered.contains("Hank Aaron"));
        assert!(rendered.contains("Milwaukee Braves, 1954"));
        assert!(rendered.contains("Eddie Mathews"));
    }

    #[test]
    fn roster_numbers_players_only() {
        let (found, labels) = fixture();
        let rendered = render_roster(&found, &labels).unwrap();
        assert!(rendered.contains("1. Hank Aaron"));
        assert!(rendered.contains("2. Eddie Mathews"));
        assert!(!rendered.contains("Milwaukee"));
    }

    #[test]
    fn candidates_show_birth_years_when_known() {
        let candidates = vec![
            Candidate {
                player_id: "jonesbo01".to_string(),
                birth_year: Some(1949),
            },
            Candidate {
                player_id: "jonesbo02".to_string(),
                birth_year: None,
            },
        ];
        let rendered = render_candidates("Bobby Jones", &candidates).unwrap();
        assert!(rendered.contains("1: Bobby Jones born in 1949"));
        assert!(rendered.contains("2: Bobby Jones (birth year unknown)"));
    }
}
