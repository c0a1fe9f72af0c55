// src/dataset.rs
//! Assembles the query context: graph, name index and labels, going
//! through the cache when the source fingerprint allows it.

use crate::cache::{self, Cache};
use crate::config::Config;
use crate::error::Result;
use crate::graph::{builder, RosterGraph};
use crate::labels::Labels;
use crate::loader;
use crate::resolve::NameIndex;

/// Everything a query needs, built once per run.
pub struct Dataset {
    pub graph: RosterGraph,
    pub names: NameIndex,
    pub labels: Labels,
}

/// How assembly went, for verbose reporting.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub graph_cached: bool,
    pub names_cached: bool,
    /// Malformed rows skipped across the files that were actually read.
    pub skipped: usize,
    /// Non-fatal problems, currently cache writes that failed.
    pub warnings: Vec<String>,
}

/// Loads the dataset, serving the graph and the name index from the cache
/// when their fingerprint matches the CSV bytes on disk.
///
/// # Errors
/// `Io` or `Csv` when a source file is missing or unreadable.
pub fn assemble(config: &Config) -> Result<(Dataset, Assembly)> {
    assemble_inner(config, false)
}

/// Rebuilds the graph and the name index from the CSVs unconditionally,
/// rewriting the cache artifacts when caching is enabled.
///
/// # Errors
/// `Io` or `Csv` when a source file is missing or unreadable.
pub fn rebuild(config: &Config) -> Result<(Dataset, Assembly)> {
    assemble_inner(config, true)
}

fn assemble_inner(config: &Config, force: bool) -> Result<(Dataset, Assembly)> {
    let mut assembly = Assembly::default();

    let cache = if config.cache.enabled {
        let sources = loader::source_files(&config.data_dir);
        let fingerprint = cache::fingerprint(&sources)?;
        Some(Cache::open(&config.cache.dir, fingerprint))
    } else {
        None
    };

    // Labels are rebuilt every run; the cacheable artifacts are the graph
    // and the name index.
    let people = loader::load_people(&config.data_dir)?;
    let teams = loader::load_teams(&config.data_dir)?;
    assembly.skipped += people.skipped() + teams.skipped();
    let labels = Labels::build(&people.records, &teams.records);

    let cached_graph = if force {
        None
    } else {
        cache.as_ref().and_then(Cache::load_graph)
    };
    let cached_names = if force {
        None
    } else {
        cache.as_ref().and_then(Cache::load_names)
    };
    assembly.graph_cached = cached_graph.is_some();
    assembly.names_cached = cached_names.is_some();

    let (graph, names) = match (cached_graph, cached_names) {
        (Some(graph), Some(names)) => (graph, names),
        (cached_graph, cached_names) => {
            let appearances = loader::load_appearances(&config.data_dir)?;
            assembly.skipped += appearances.skipped();

            let graph = cached_graph
                .unwrap_or_else(|| builder::from_appearances(&appearances.records));
            let names = cached_names.unwrap_or_else(|| {
                NameIndex::build_filtered(&people.records, &appearances.records)
            });

            if let Some(cache) = &cache {
                if !assembly.graph_cached {
                    if let Err(e) = cache.save_graph(&graph) {
                        assembly.warnings.push(format!("cache write failed: {e}"));
                    }
                }
                if !assembly.names_cached {
                    if let Err(e) = cache.save_names(&names) {
                        assembly.warnings.push(format!("cache write failed: {e}"));
                    }
                }
            }
            (graph, names)
        }
    };

    Ok((
        Dataset {
            graph,
            names,
            labels,
        },
        assembly,
    ))
}
