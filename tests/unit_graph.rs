// tests/unit_graph.rs
//! Roster graph construction invariants.

use shortstop_core::graph::{builder, Node, RosterGraph};
use shortstop_core::records::Appearance;

fn row(player: &str, team: &str, year: u16) -> Appearance {
    Appearance {
        year,
        team_id: team.to_string(),
        player_id: player.to_string(),
    }
}

fn sample_rows() -> Vec<Appearance> {
    vec![
        row("p1", "T1", 2000),
        row("p2", "T1", 2000),
        row("p2", "T2", 2001),
        row("p3", "T2", 2001),
    ]
}

#[test]
fn every_record_becomes_one_edge() {
    let graph = builder::from_appearances(&sample_rows());
    assert_eq!(graph.edge_count(), 4);
    assert!(graph
        .neighbors(&Node::player("p1"))
        .contains(&Node::team_season("T1", 2000)));
    assert!(graph
        .neighbors(&Node::team_season("T2", 2001))
        .contains(&Node::player("p3")));
}

#[test]
fn graph_is_bipartite_and_symmetric() {
    let graph = builder::from_appearances(&sample_rows());
    graph.validate().unwrap();
    for node in graph.nodes() {
        for neighbor in graph.neighbors(node) {
            assert_ne!(node.is_player(), neighbor.is_player());
            assert!(graph.neighbors(neighbor).contains(node));
        }
    }
}

#[test]
fn duplicate_rows_collapse_into_one_edge() {
    let mut rows = sample_rows();
    rows.push(row("p1", "T1", 2000));
    rows.push(row("p1", "T1", 2000));

    let graph = builder::from_appearances(&rows);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbors(&Node::player("p1")).len(), 1);
}

#[test]
fn same_record_set_builds_identical_adjacency() {
    let first = builder::from_appearances(&sample_rows());
    let second = builder::from_appearances(&sample_rows());

    assert_eq!(first.node_count(), second.node_count());
    assert_eq!(first.edge_count(), second.edge_count());
    for node in first.nodes() {
        assert_eq!(first.neighbors(node), second.neighbors(node));
    }
}

#[test]
fn seasons_split_a_franchise_into_distinct_nodes() {
    let graph = builder::from_appearances(&[
        row("p1", "NYA", 1927),
        row("p2", "NYA", 1928),
    ]);

    // p1 and p2 never overlap: the 1927 and 1928 rosters are separate nodes.
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.neighbors(&Node::team_season("NYA", 1927)).len(), 1);
    assert_eq!(graph.neighbors(&Node::team_season("NYA", 1928)).len(), 1);
}

#[test]
fn empty_record_set_builds_an_empty_graph() {
    let graph = builder::from_appearances(&[]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    graph.validate().unwrap();
}

#[test]
fn link_order_drives_neighbor_order() {
    let mut graph = RosterGraph::new();
    graph.link(Node::player("b"), Node::team_season("T1", 2000));
    graph.link(Node::player("a"), Node::team_season("T1", 2000));
    graph.link(Node::player("c"), Node::team_season("T1", 2000));

    assert_eq!(
        graph.neighbors(&Node::team_season("T1", 2000)),
        &[Node::player("b"), Node::player("a"), Node::player("c")]
    );
}
