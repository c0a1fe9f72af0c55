// src/graph/mod.rs
//! The bipartite roster graph: players on one side, team-seasons on the
//! other, one undirected edge per recorded appearance.

pub mod builder;
pub mod node;
pub mod store;

pub use node::Node;
pub use store::{GraphSnapshot, NodeAdjacency, RosterGraph};
