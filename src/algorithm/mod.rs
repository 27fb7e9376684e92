pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
