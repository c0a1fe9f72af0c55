// src/config.rs
//! Tool configuration from `shortstop.toml`, with defaults for everything.
//!
//! The file is optional and loading is best-effort: no file, or a file
//! that does not parse, falls back to defaults so queries are never
//! blocked on configuration.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Local configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "shortstop.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding `Appearances.csv`, `People.csv` and `Teams.csv`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            dir: default_cache_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

const fn default_cache_enabled() -> bool {
    true
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".shortstop")
}

impl Config {
    /// Reads `shortstop.toml` from the working directory when present.
    #[must_use]
    pub fn load() -> Self {
        fs::read_to_string(CONFIG_FILE)
            .ok()
            .and_then(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    /// Parses config content; None when it does not parse as TOML.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Command-line flags win over the file.
    pub fn apply_overrides(&mut self, data_dir: Option<PathBuf>, no_cache: bool) {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if no_cache {
            self.cache.enabled = false;
        }
    }
}
