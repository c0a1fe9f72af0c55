// src/cli/session.rs
//! The interactive query loop.
//!
//! All input and output flow through the `BufRead`/`Write` parameters, so
//! tests can script an entire session from byte buffers. One search runs
//! per start player; every end query against that start reuses its state.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::dataset::Dataset;
use crate::error::ShortstopError;
use crate::graph::Node;
use crate::path;
use crate::reporting;
use crate::resolve::{self, Candidate};
use crate::search::{self, SearchState};

const START_PROMPT: &str =
    "Enter the first and last name of a player in the following format: \
     '<Firstname> <Lastname>', or 'exit' to quit: ";
const END_PROMPT: &str =
    "Enter the first and last name of another player, 'new' to change the \
     starting player, or 'exit' to quit: ";

/// What a name entry turned into.
enum Resolution {
    Picked(String),
    /// Could not be resolved; a message was printed, ask again.
    Retry,
    /// The user quit mid-prompt, or input ran out.
    Quit,
}

/// Runs the session until the user exits or input runs out.
///
/// # Errors
/// Only I/O failures on the session streams; every query outcome,
/// including unreachable ends, is rendered as ordinary output.
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
) -> Result<()> {
    loop {
        let Some(start_id) = pick_start(input, output, dataset)? else {
            break;
        };
        let state = search::search(&dataset.graph, Node::player(start_id));
        if !query_loop(input, output, dataset, &state)? {
            break;
        }
    }
    writeln!(output, "Bye")?;
    Ok(())
}

/// Prompts until a start name resolves. None when the user is done.
fn pick_start(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
) -> Result<Option<String>> {
    loop {
        let Some(entry) = read_entry(input, output, START_PROMPT)? else {
            return Ok(None);
        };
        if entry == "exit" {
            return Ok(None);
        }
        match resolve_entry(input, output, dataset, &entry)? {
            Resolution::Picked(id) => return Ok(Some(id)),
            Resolution::Retry => {}
            Resolution::Quit => return Ok(None),
        }
    }
}

/// The end-name loop for one search. True means the user asked for a new
/// start, false means the session is over.
fn query_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
    state: &SearchState,
) -> Result<bool> {
    loop {
        let Some(entry) = read_entry(input, output, END_PROMPT)? else {
            return Ok(false);
        };
        match entry.as_str() {
            "exit" => return Ok(false),
            "new" => return Ok(true),
            _ => match resolve_entry(input, output, dataset, &entry)? {
                Resolution::Picked(end_id) => {
                    report_connection(input, output, dataset, state, &end_id)?;
                }
                Resolution::Retry => {}
                Resolution::Quit => return Ok(false),
            },
        }
    }
}

/// Resolves one typed name, running the numbered disambiguation dialog
/// when the name is shared by several players.
fn resolve_entry(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
    entry: &str,
) -> Result<Resolution> {
    match dataset.names.resolve(entry) {
        [] => {
            writeln!(output, "{}", "Invalid player name.".yellow())?;
            Ok(Resolution::Retry)
        }
        [only] => Ok(Resolution::Picked(only.player_id.clone())),
        many => disambiguate(input, output, entry, many),
    }
}

fn disambiguate(
    input: &mut impl BufRead,
    output: &mut impl Write,
    name: &str,
    candidates: &[Candidate],
) -> Result<Resolution> {
    writeln!(output, "More than one {name} has been found.")?;
    write!(output, "{}", reporting::render_candidates(name, candidates)?)?;
    let prompt = format!("Please select the number of the {name} you want: ");
    loop {
        let Some(entry) = read_entry(input, output, &prompt)? else {
            return Ok(Resolution::Quit);
        };
        if entry == "exit" {
            return Ok(Resolution::Quit);
        }
        let Ok(choice) = entry.parse::<usize>() else {
            writeln!(
                output,
                "Enter a number between 1 and {}.",
                candidates.len()
            )?;
            continue;
        };
        match resolve::pick_one_based(candidates, choice) {
            Ok(candidate) => return Ok(Resolution::Picked(candidate.player_id.clone())),
            Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
        }
    }
}

/// Decodes and renders the path to `end_id`, then offers biography links
/// for the players along it.
fn report_connection(
    input: &mut impl BufRead,
    output: &mut impl Write,
    dataset: &Dataset,
    state: &SearchState,
    end_id: &str,
) -> Result<()> {
    match path::decode(state, &Node::player(end_id)) {
        Ok(found) => {
            write!(output, "{}", reporting::render_path(&found, &dataset.labels)?)?;
            write!(output, "{}", reporting::render_roster(&found, &dataset.labels)?)?;
            offer_bio(input, output, &found.players())
        }
        Err(ShortstopError::Unreachable { .. }) => {
            writeln!(output, "{}", "No connection found.".yellow())?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

/// Biography pick over the players of a rendered path. Enter skips.
fn offer_bio(
    input: &mut impl BufRead,
    output: &mut impl Write,
    players: &[&str],
) -> Result<()> {
    let prompt = "Please select the number of a player you would like more \
                  information on, or press Enter to continue: ";
    loop {
        let Some(entry) = read_entry(input, output, prompt)? else {
            return Ok(());
        };
        if entry.is_empty() || entry == "exit" {
            return Ok(());
        }
        let Ok(choice) = entry.parse::<usize>() else {
            writeln!(output, "Enter a number between 1 and {}.", players.len())?;
            continue;
        };
        match resolve::pick_one_based(players, choice) {
            Ok(id) => {
                writeln!(output, "{}", reporting::bio_url(id).blue().underline())?;
                return Ok(());
            }
            Err(e) => writeln!(output, "{}", e.to_string().yellow())?,
        }
    }
}

/// Writes the prompt, reads one line, trims it. None on end of input.
fn read_entry(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
