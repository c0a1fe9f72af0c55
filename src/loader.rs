// src/loader.rs
//! CSV ingestion for the three Lahman source files.
//!
//! A load never aborts on a bad row: rows that fail to parse or are missing
//! required fields are recorded as `MalformedRecord` and skipped, so one
//! mangled line cannot take down a 100k-row import. Only file-level
//! problems (missing file, unreadable header) are hard errors.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Result, ShortstopError};
use crate::records::{Appearance, Person, Team};

/// Appearance facts: one row per (player, team, season).
pub const APPEARANCES_FILE: &str = "Appearances.csv";
/// The person register: ids, names, birth years.
pub const PEOPLE_FILE: &str = "People.csv";
/// Team display names by team id.
pub const TEAMS_FILE: &str = "Teams.csv";

/// Rows that survived a load, plus the rows that did not.
#[derive(Debug)]
pub struct LoadOutcome<T> {
    pub records: Vec<T>,
    /// One `MalformedRecord` per rejected row, kept for reporting.
    pub rejected: Vec<ShortstopError>,
}

impl<T> LoadOutcome<T> {
    /// Number of rows skipped as malformed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.rejected.len()
    }
}

/// # Errors
/// `Io` when the file cannot be opened, `Csv` when the header is unreadable.
pub fn load_appearances(data_dir: &Path) -> Result<LoadOutcome<Appearance>> {
    read_rows(&data_dir.join(APPEARANCES_FILE), Appearance::is_complete)
}

/// # Errors
/// `Io` when the file cannot be opened, `Csv` when the header is unreadable.
pub fn load_people(data_dir: &Path) -> Result<LoadOutcome<Person>> {
    read_rows(&data_dir.join(PEOPLE_FILE), Person::is_complete)
}

/// # Errors
/// `Io` when the file cannot be opened, `Csv` when the header is unreadable.
pub fn load_teams(data_dir: &Path) -> Result<LoadOutcome<Team>> {
    read_rows(&data_dir.join(TEAMS_FILE), Team::is_complete)
}

/// The three source files under `data_dir`, in fingerprint order.
#[must_use]
pub fn source_files(data_dir: &Path) -> [PathBuf; 3] {
    [
        data_dir.join(APPEARANCES_FILE),
        data_dir.join(PEOPLE_FILE),
        data_dir.join(TEAMS_FILE),
    ]
}

fn read_rows<T, F>(path: &Path, is_complete: F) -> Result<LoadOutcome<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let file = File::open(path).map_err(|source| ShortstopError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for row in reader.records() {
        match row {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                match record.deserialize::<T>(Some(&headers)) {
                    Ok(value) if is_complete(&value) => records.push(value),
                    Ok(_) => rejected.push(malformed(path, line, "missing required field")),
                    Err(e) => rejected.push(malformed(path, line, &e.to_string())),
                }
            }
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                rejected.push(malformed(path, line, "unreadable row"));
            }
        }
    }
    Ok(LoadOutcome { records, rejected })
}

fn malformed(path: &Path, line: u64, reason: &str) -> ShortstopError {
    ShortstopError::MalformedRecord {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
