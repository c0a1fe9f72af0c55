// src/cli/mod.rs
//! Command-line surface: argument parsing, command handlers, and the
//! interactive session.

pub mod args;
pub mod handlers;
pub mod session;

pub use args::{Cli, Commands};
pub use handlers::dispatch;
