// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shortstop",
    version,
    about = "Shortest teammate paths between baseball players"
)]
pub struct Cli {
    /// Defaults to the interactive loop when no command is given.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest teammate path between two players
    Link {
        /// Starting player, as "First Last"
        start: String,
        /// Target player, as "First Last"
        end: String,
        /// Disambiguate a duplicate start name by birth year
        #[arg(long, value_name = "YEAR")]
        start_born: Option<u16>,
        /// Disambiguate a duplicate end name by birth year
        #[arg(long, value_name = "YEAR")]
        end_born: Option<u16>,
        /// Directory holding the Lahman CSV files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Ignore cached artifacts and rebuild from the CSVs
        #[arg(long)]
        no_cache: bool,
        /// Report cache provenance and skipped-row counts
        #[arg(long, short)]
        verbose: bool,
    },
    /// Interactive loop: pick a start player, then query connections
    Play {
        /// Directory holding the Lahman CSV files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Ignore cached artifacts and rebuild from the CSVs
        #[arg(long)]
        no_cache: bool,
    },
    /// Rebuild the graph and name index and rewrite the cache artifacts
    Build {
        /// Directory holding the Lahman CSV files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
        /// Report skipped-row counts and graph size
        #[arg(long, short)]
        verbose: bool,
    },
}
