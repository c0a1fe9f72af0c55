// src/lib.rs
//! Shortest teammate paths between baseball players.
//!
//! Appearance records build a bipartite graph of players and team-seasons;
//! one breadth-first search per start player answers any number of
//! connection queries through its predecessor tree.

pub mod cache;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod exit;
pub mod graph;
pub mod labels;
pub mod loader;
pub mod path;
pub mod records;
pub mod reporting;
pub mod resolve;
pub mod search;
