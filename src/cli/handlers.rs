// src/cli/handlers.rs
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::{Cli, Commands};
use crate::cli::session;
use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::error::ShortstopError;
use crate::exit::ShortstopExit;
use crate::graph::Node;
use crate::path;
use crate::reporting;
use crate::resolve;
use crate::search;

/// Arguments for the link command (used by handlers).
#[derive(Debug, Clone)]
pub struct LinkArgs {
    pub start: String,
    pub end: String,
    pub start_born: Option<u16>,
    pub end_born: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub no_cache: bool,
    pub verbose: bool,
}

/// Executes the parsed command. No command means the interactive loop.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn dispatch(cli: Cli) -> Result<ShortstopExit> {
    match cli.command {
        Some(Commands::Link {
            start,
            end,
            start_born,
            end_born,
            data_dir,
            no_cache,
            verbose,
        }) => handle_link(&LinkArgs {
            start,
            end,
            start_born,
            end_born,
            data_dir,
            no_cache,
            verbose,
        }),
        Some(Commands::Play { data_dir, no_cache }) => handle_play(data_dir, no_cache),
        Some(Commands::Build { data_dir, verbose }) => handle_build(data_dir, verbose),
        None => handle_play(None, false),
    }
}

/// Handles the one-shot link query.
///
/// # Errors
/// Returns error if the dataset cannot be assembled.
pub fn handle_link(args: &LinkArgs) -> Result<ShortstopExit> {
    let mut config = Config::load();
    config.apply_overrides(args.data_dir.clone(), args.no_cache);

    let (dataset, assembly) = dataset::assemble(&config)?;
    if args.verbose {
        print!("{}", reporting::render_assembly(&assembly)?);
    }

    let Some(start) = resolve_endpoint(&dataset, &args.start, args.start_born)? else {
        return Ok(ShortstopExit::BadName);
    };
    let Some(end) = resolve_endpoint(&dataset, &args.end, args.end_born)? else {
        return Ok(ShortstopExit::BadName);
    };

    let state = search::search(&dataset.graph, Node::player(start));
    match path::decode(&state, &Node::player(end)) {
        Ok(found) => {
            print!("{}", reporting::render_path(&found, &dataset.labels)?);
            Ok(ShortstopExit::Success)
        }
        Err(ShortstopError::Unreachable { .. }) => {
            println!(
                "{}",
                format!(
                    "No connection found between {} and {}.",
                    args.start, args.end
                )
                .yellow()
            );
            Ok(ShortstopExit::NoConnection)
        }
        Err(other) => Err(other.into()),
    }
}

/// Resolves one endpoint name. None means the name did not pin down a
/// single player; the reason has already been reported.
fn resolve_endpoint(
    dataset: &Dataset,
    name: &str,
    born: Option<u16>,
) -> Result<Option<String>> {
    match resolve::resolve_selected(&dataset.names, name, born) {
        Ok(candidate) => Ok(Some(candidate.player_id.clone())),
        Err(e @ ShortstopError::AmbiguousName { .. }) => {
            eprintln!("{} {e}", "error:".red().bold());
            let candidates = dataset.names.resolve(name);
            eprint!("{}", reporting::render_candidates(name, candidates)?);
            eprintln!("Re-run with --start-born or --end-born to pick one.");
            Ok(None)
        }
        Err(e @ (ShortstopError::UnknownName(_) | ShortstopError::InvalidSelection { .. })) => {
            eprintln!("{} {e}", "error:".red().bold());
            Ok(None)
        }
        Err(other) => Err(other.into()),
    }
}

/// Handles the interactive session.
///
/// # Errors
/// Returns error if the dataset cannot be assembled or a stream fails.
pub fn handle_play(data_dir: Option<PathBuf>, no_cache: bool) -> Result<ShortstopExit> {
    let mut config = Config::load();
    config.apply_overrides(data_dir, no_cache);

    let (dataset, _) = dataset::assemble(&config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut stdin.lock(), &mut stdout.lock(), &dataset)?;
    Ok(ShortstopExit::Success)
}

/// Handles the cache rebuild command.
///
/// # Errors
/// Returns error if loading or building fails.
pub fn handle_build(data_dir: Option<PathBuf>, verbose: bool) -> Result<ShortstopExit> {
    let mut config = Config::load();
    config.apply_overrides(data_dir, false);

    let (dataset, assembly) = dataset::rebuild(&config)?;
    dataset.graph.validate()?;
    if verbose {
        print!("{}", reporting::render_assembly(&assembly)?);
    }
    if !config.cache.enabled {
        println!(
            "{}",
            "cache disabled in shortstop.toml; artifacts not written".yellow()
        );
    }
    println!(
        "{} {} nodes, {} edges, {} names indexed",
        "Built:".green().bold(),
        dataset.graph.node_count(),
        dataset.graph.edge_count(),
        dataset.names.len()
    );
    Ok(ShortstopExit::Success)
}
