//! SSSP Explorer - random weighted digraphs and Dijkstra shortest paths
//!
//! The library generates random directed graphs with integer weights, runs
//! Dijkstra's algorithm from a chosen source and reconstructs the shortest path
//! to any target. A small HTTP service exposes the same operations to a
//! browser-based visualizer.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra},
    path::{path_weight, reconstruct},
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::generators::{generate, GeneratorConfig, GraphGenerator, SelfLoopPolicy};

/// Node identifier. Identifiers are dense, `0..node_count`.
pub type NodeId = usize;

/// Edge weight. Graphs only ever store non-negative weights.
pub type Weight = i64;

/// Accumulated path cost.
pub type Distance = i64;

/// Sentinel stored for nodes the source cannot reach.
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// Path as an ordered node sequence from source to target, empty if unreachable.
pub type Path = Vec<NodeId>;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node count: {0} (at least 2 nodes are required)")]
    InvalidNodeCount(usize),

    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Invalid generator configuration: {0}")]
    InvalidGeneratorConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
