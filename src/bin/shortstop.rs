// src/bin/shortstop.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use shortstop_core::cli::{self, Cli};
use shortstop_core::exit::ShortstopExit;

fn main() -> ShortstopExit {
    match run() {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ShortstopExit::Error
        }
    }
}

fn run() -> Result<ShortstopExit> {
    let cli = Cli::parse();
    cli::dispatch(cli)
}
