// src/resolve.rs
//! Name resolution: human-entered full names to player identities.
//!
//! A full name may match zero, one, or several registered players (there
//! are two Bobby Joneses and three Mike Smiths in the register). The index
//! never guesses among duplicates. Callers disambiguate with a 1-based
//! pick in the interactive loop, or by birth year from the command line.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShortstopError};
use crate::records::{Appearance, Person};

/// One resolvable identity behind a full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub player_id: String,
    pub birth_year: Option<u16>,
}

/// Full name to candidates, candidates in person-record input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameIndex {
    by_name: HashMap<String, Vec<Candidate>>,
}

impl NameIndex {
    /// Indexes every person in the register.
    #[must_use]
    pub fn build(people: &[Person]) -> Self {
        Self::build_inner(people, None)
    }

    /// Indexes only persons with at least one appearance record.
    ///
    /// The register carries managers and umpires who never took the field;
    /// offering them as path endpoints would turn every query into an
    /// unreachable result, so the default index drops them up front.
    #[must_use]
    pub fn build_filtered(people: &[Person], appearances: &[Appearance]) -> Self {
        let played: HashSet<&str> = appearances
            .iter()
            .map(|row| row.player_id.as_str())
            .collect();
        Self::build_inner(people, Some(&played))
    }

    fn build_inner(people: &[Person], played: Option<&HashSet<&str>>) -> Self {
        let mut by_name: HashMap<String, Vec<Candidate>> = HashMap::new();
        for person in people {
            if let Some(played) = played {
                if !played.contains(person.player_id.as_str()) {
                    continue;
                }
            }
            by_name
                .entry(person.full_name())
                .or_default()
                .push(Candidate {
                    player_id: person.player_id.clone(),
                    birth_year: person.birth_year,
                });
        }
        Self { by_name }
    }

    /// Candidates for a full name, in input order. Empty when unknown.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &[Candidate] {
        self.by_name.get(name).map_or(&[], Vec::as_slice)
    }

    /// Resolves a name that must identify exactly one player.
    ///
    /// # Errors
    /// `UnknownName` for zero matches, `AmbiguousName` for several.
    pub fn resolve_unique(&self, name: &str) -> Result<&Candidate> {
        match self.resolve(name) {
            [] => Err(ShortstopError::UnknownName(name.to_string())),
            [only] => Ok(only),
            many => Err(ShortstopError::AmbiguousName {
                name: name.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Number of distinct full names indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Picks from a list by 1-based index, the number a human typed at a
/// numbered prompt.
///
/// # Errors
/// `InvalidSelection` for 0 or anything past the end of the list.
pub fn pick_one_based<T>(items: &[T], choice: usize) -> Result<&T> {
    choice
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or(ShortstopError::InvalidSelection {
            given: choice,
            max: items.len(),
        })
}

/// Picks the single candidate born in the given year. This is the
/// non-interactive disambiguation path, driven by `--start-born` and
/// `--end-born`.
///
/// # Errors
/// `UnknownName` when nobody with that name was born that year,
/// `AmbiguousName` when several were.
pub fn select_by_birth_year<'a>(
    name: &str,
    candidates: &'a [Candidate],
    year: u16,
) -> Result<&'a Candidate> {
    let matched: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| candidate.birth_year == Some(year))
        .collect();
    match matched.as_slice() {
        [] => Err(ShortstopError::UnknownName(format!("{name}, born {year}"))),
        [only] => Ok(only),
        many => Err(ShortstopError::AmbiguousName {
            name: format!("{name}, born {year}"),
            count: many.len(),
        }),
    }
}

/// Resolution for non-interactive callers: by birth year when one was
/// supplied, otherwise the name must be unique on its own.
///
/// # Errors
/// Whatever the underlying resolution produced.
pub fn resolve_selected<'a>(
    index: &'a NameIndex,
    name: &str,
    birth_year: Option<u16>,
) -> Result<&'a Candidate> {
    match birth_year {
        Some(year) => select_by_birth_year(name, index.resolve(name), year),
        None => index.resolve_unique(name),
    }
}
