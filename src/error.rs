// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortstopError {
    /// A source row that cannot contribute to the graph or the name index.
    /// Loads skip and count these rather than aborting.
    #[error("malformed row in {path} at line {line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("no player named '{0}' has a recorded appearance")]
    UnknownName(String),

    #[error("'{name}' matches {count} players")]
    AmbiguousName { name: String, count: usize },

    #[error("selection {given} is out of range 1..={max}")]
    InvalidSelection { given: usize, max: usize },

    #[error("no connection: {end} was never reached from {start}")]
    Unreachable { start: String, end: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("invariant violation: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, ShortstopError>;

// Allow `?` on std::io::Error by converting to ShortstopError::Io with unknown path.
impl From<std::io::Error> for ShortstopError {
    fn from(source: std::io::Error) -> Self {
        ShortstopError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
