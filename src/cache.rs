// src/cache.rs
//! Fingerprint-keyed JSON caching for the graph and the name index.
//!
//! Every artifact embeds a SHA-256 fingerprint of the source CSV bytes.
//! An artifact written from different data, or one that fails to parse or
//! validate, is bypassed rather than trusted: a cache miss costs one
//! rebuild, a stale hit silently answers queries from the wrong season of
//! data.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, ShortstopError};
use crate::graph::RosterGraph;
use crate::resolve::NameIndex;

/// Graph artifact inside the cache directory.
pub const GRAPH_FILE: &str = "graph.json";
/// Name-index artifact inside the cache directory.
pub const NAMES_FILE: &str = "names.json";

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    fingerprint: String,
    payload: T,
}

/// SHA-256 over the given files' raw bytes, in order.
///
/// # Errors
/// `Io` naming the first file that cannot be read.
pub fn fingerprint(paths: &[PathBuf]) -> Result<String> {
    let mut hasher = Sha256::new();
    for path in paths {
        let mut file = File::open(path).map_err(|source| io_error(source, path))?;
        io::copy(&mut file, &mut hasher).map_err(|source| io_error(source, path))?;
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn io_error(source: io::Error, path: &Path) -> ShortstopError {
    ShortstopError::Io {
        source,
        path: path.to_path_buf(),
    }
}

/// A cache directory bound to one source-data fingerprint.
pub struct Cache {
    dir: PathBuf,
    fingerprint: String,
}

impl Cache {
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>, fingerprint: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            fingerprint: fingerprint.into(),
        }
    }

    /// Loads the cached graph if it is present, keyed to this fingerprint,
    /// and structurally valid. Any failure means "no cache".
    #[must_use]
    pub fn load_graph(&self) -> Option<RosterGraph> {
        let snapshot = self.load(GRAPH_FILE)?;
        RosterGraph::restore(snapshot).ok()
    }

    /// # Errors
    /// `Io` or `Cache` when the artifact cannot be written.
    pub fn save_graph(&self, graph: &RosterGraph) -> Result<()> {
        self.save(GRAPH_FILE, &graph.snapshot())
    }

    /// Loads the cached name index if it is present and keyed to this
    /// fingerprint.
    #[must_use]
    pub fn load_names(&self) -> Option<NameIndex> {
        self.load(NAMES_FILE)
    }

    /// # Errors
    /// `Io` or `Cache` when the artifact cannot be written.
    pub fn save_names(&self, names: &NameIndex) -> Result<()> {
        self.save(NAMES_FILE, names)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let content = fs::read_to_string(self.dir.join(file)).ok()?;
        let envelope: Envelope<T> = serde_json::from_str(&content).ok()?;
        (envelope.fingerprint == self.fingerprint).then_some(envelope.payload)
    }

    fn save<T: Serialize>(&self, file: &str, payload: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| io_error(source, &self.dir))?;
        let envelope = Envelope {
            fingerprint: self.fingerprint.clone(),
            payload,
        };
        let json = serde_json::to_string(&envelope)
            .map_err(|e| ShortstopError::Cache(format!("cannot encode {file}: {e}")))?;
        let path = self.dir.join(file);
        fs::write(&path, json).map_err(|source| io_error(source, &path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{builder, Node};
    use crate::records::{Appearance, Person};
    use tempfile::TempDir;

    fn sample_graph() -> RosterGraph {
        builder::from_appearances(&[Appearance {
            year: 1954,
            team_id: "ML1".to_string(),
            player_id: "aaronha01".to_string(),
        }])
    }

    fn sample_names() -> NameIndex {
        NameIndex::build(&[Person {
            player_id: "aaronha01".to_string(),
            birth_year: Some(1934),
            first: "Hank".to_string(),
            last: "Aaron".to_string(),
        }])
    }

    #[test]
    fn fingerprint_tracks_every_source_file() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        let before = fingerprint(&[a.clone(), b.clone()]).unwrap();
        fs::write(&b, "two plus a row").unwrap();
        let after = fingerprint(&[a, b]).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn round_trip_preserves_graph_and_names() {
        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path(), "fp1");
        cache.save_graph(&sample_graph()).unwrap();
        cache.save_names(&sample_names()).unwrap();

        let graph = cache.load_graph().unwrap();
        assert!(graph.contains(&Node::player("aaronha01")));
        let names = cache.load_names().unwrap();
        assert_eq!(names.resolve("Hank Aaron").len(), 1);
    }

    #[test]
    fn mismatched_fingerprint_is_a_miss() {
        let dir = TempDir::new().unwrap();
        Cache::open(dir.path(), "fp1")
            .save_graph(&sample_graph())
            .unwrap();

        let stale = Cache::open(dir.path(), "fp2");
        assert!(stale.load_graph().is_none());
    }

    #[test]
    fn invalid_graph_under_the_right_fingerprint_is_a_miss() {
        use crate::graph::{GraphSnapshot, NodeAdjacency};

        let dir = TempDir::new().unwrap();
        let cache = Cache::open(dir.path(), "fp1");
        cache.save_graph(&sample_graph()).unwrap();

        // Well-formed envelope, matching fingerprint, same-kind edge.
        let tampered = Envelope {
            fingerprint: "fp1".to_string(),
            payload: GraphSnapshot {
                nodes: vec![
                    NodeAdjacency {
                        node: Node::player("a"),
                        neighbors: vec![Node::player("b")],
                    },
                    NodeAdjacency {
                        node: Node::player("b"),
                        neighbors: vec![Node::player("a")],
                    },
                ],
            },
        };
        fs::write(
            dir.path().join(GRAPH_FILE),
            serde_json::to_string(&tampered).unwrap(),
        )
        .unwrap();

        assert!(cache.load_graph().is_none());
    }

    #[test]
    fn unparseable_artifact_is_a_miss() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GRAPH_FILE), "{ not json").unwrap();

        let cache = Cache::open(dir.path(), "fp1");
        assert!(cache.load_graph().is_none());
    }

    #[test]
    fn missing_directory_is_a_miss() {
        let cache = Cache::open("/nonexistent/shortstop-cache", "fp1");
        assert!(cache.load_graph().is_none());
        assert!(cache.load_names().is_none());
    }
}
