// tests/integration_dataset.rs
//! End-to-end assembly: CSV files through the loader, cache and builder.

use std::fs;
use std::path::Path;

use shortstop_core::config::Config;
use shortstop_core::dataset;
use shortstop_core::graph::Node;
use shortstop_core::{path, search};
use tempfile::TempDir;

const APPEARANCES: &str = "\
yearID,teamID,lgID,playerID,G_all
1954,ML1,NL,aaronha01,122
1954,ML1,NL,mathied01,138
1966,ATL,NL,aaronha01,158
1966,ATL,NL,niekrph01,64
";

const PEOPLE: &str = "\
playerID,birthYear,nameFirst,nameLast
aaronha01,1934,Hank,Aaron
mathied01,1931,Eddie,Mathews
niekrph01,1939,Phil,Niekro
selibu01,1934,Bud,Selig
";

const TEAMS: &str = "\
yearID,teamID,name
1954,ML1,Milwaukee Braves
1966,ATL,Atlanta Braves
";

fn write_sources(dir: &Path) {
    fs::write(dir.join("Appearances.csv"), APPEARANCES).unwrap();
    fs::write(dir.join("People.csv"), PEOPLE).unwrap();
    fs::write(dir.join("Teams.csv"), TEAMS).unwrap();
}

fn config_for(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.data_dir = dir.path().join("data");
    config.cache.dir = dir.path().join("cache");
    config
}

fn fixture() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    write_sources(&dir.path().join("data"));
    let config = config_for(&dir);
    (dir, config)
}

#[test]
fn assembles_a_queryable_dataset_from_csv() {
    let (_dir, config) = fixture();
    let (dataset, assembly) = dataset::assemble(&config).unwrap();

    assert!(!assembly.graph_cached);
    assert!(!assembly.names_cached);
    assert_eq!(assembly.skipped, 0);

    let state = search::search(&dataset.graph, Node::player("mathied01"));
    let found = path::decode(&state, &Node::player("niekrph01")).unwrap();
    assert_eq!(found.hops(), 4);
    assert_eq!(
        found.render(&dataset.labels),
        vec![
            "Eddie Mathews",
            "Milwaukee Braves, 1954",
            "Hank Aaron",
            "Atlanta Braves, 1966",
            "Phil Niekro",
        ]
    );
}

#[test]
fn name_index_excludes_people_without_appearances() {
    let (_dir, config) = fixture();
    let (dataset, _) = dataset::assemble(&config).unwrap();

    assert_eq!(dataset.names.resolve("Hank Aaron").len(), 1);
    assert!(dataset.names.resolve("Bud Selig").is_empty());
    // The label table is unfiltered; it serves rendering, not resolution.
    assert_eq!(dataset.labels.player("selibu01"), Some("Bud Selig"));
}

#[test]
fn second_assembly_hits_the_cache() {
    let (_dir, config) = fixture();
    let (first, _) = dataset::assemble(&config).unwrap();
    let (second, assembly) = dataset::assemble(&config).unwrap();

    assert!(assembly.graph_cached);
    assert!(assembly.names_cached);
    assert_eq!(second.graph.edge_count(), first.graph.edge_count());
    assert_eq!(second.names.len(), first.names.len());
    for node in first.graph.nodes() {
        assert_eq!(second.graph.neighbors(node), first.graph.neighbors(node));
    }
}

#[test]
fn editing_a_source_file_bypasses_the_cache() {
    let (dir, config) = fixture();
    dataset::assemble(&config).unwrap();

    let appearances = dir.path().join("data").join("Appearances.csv");
    let extended = format!("{APPEARANCES}1974,ATL,NL,aaronha01,112\n");
    fs::write(&appearances, extended).unwrap();

    let (dataset, assembly) = dataset::assemble(&config).unwrap();
    assert!(!assembly.graph_cached);
    assert!(dataset.graph.contains(&Node::team_season("ATL", 1974)));
}

#[test]
fn disabled_cache_writes_no_artifacts() {
    let (dir, mut config) = fixture();
    config.cache.enabled = false;

    let (dataset, assembly) = dataset::assemble(&config).unwrap();
    assert!(!assembly.graph_cached);
    assert!(dataset.graph.contains(&Node::player("aaronha01")));
    assert!(!dir.path().join("cache").exists());
}

#[test]
fn rebuild_ignores_but_refreshes_the_cache() {
    let (dir, config) = fixture();
    dataset::assemble(&config).unwrap();

    // Corrupt the cached graph; rebuild must not read it.
    let graph_artifact = dir.path().join("cache").join("graph.json");
    fs::write(&graph_artifact, "{ not json").unwrap();

    let (dataset, assembly) = dataset::rebuild(&config).unwrap();
    assert!(!assembly.graph_cached);
    assert!(dataset.graph.contains(&Node::player("aaronha01")));

    // The artifact was rewritten, so the next assembly hits it again.
    let (_, assembly) = dataset::assemble(&config).unwrap();
    assert!(assembly.graph_cached);
}

#[test]
fn malformed_rows_are_counted_not_fatal() {
    let (dir, config) = fixture();
    let appearances = dir.path().join("data").join("Appearances.csv");
    let with_bad_rows = format!("{APPEARANCES}no-year,ML1,aaronha01\n1955,,aaronha01\n");
    fs::write(&appearances, with_bad_rows).unwrap();

    let (dataset, assembly) = dataset::assemble(&config).unwrap();
    assert_eq!(assembly.skipped, 2);
    assert_eq!(dataset.graph.edge_count(), 4);
}

#[test]
fn missing_source_file_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    let config = config_for(&dir);

    assert!(dataset::assemble(&config).is_err());
}
