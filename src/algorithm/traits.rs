use serde::Serialize;

use crate::algorithm::path::reconstruct;
use crate::graph::Graph;
use crate::{Distance, NodeId, Path, Result, INFINITE_DISTANCE};

/// Best known distance from the source for every node.
/// Unreached nodes hold [`INFINITE_DISTANCE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    distances: Vec<Distance>,
}

impl DistanceMap {
    /// All `node_count` entries start at the infinite sentinel
    pub fn new(node_count: usize) -> Self {
        DistanceMap {
            distances: vec![INFINITE_DISTANCE; node_count],
        }
    }

    /// Raw entry for `node`, `None` if the node is not tracked
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Distance to `node` if it was reached
    pub fn reachable(&self, node: NodeId) -> Option<Distance> {
        self.get(node).filter(|&d| d != INFINITE_DISTANCE)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.reachable(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    pub(crate) fn set(&mut self, node: NodeId, distance: Distance) {
        self.distances[node] = distance;
    }
}

/// Back-pointer for every node along its best known path.
/// `None` marks the source and unreached nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    predecessors: Vec<Option<NodeId>>,
}

impl PredecessorMap {
    pub fn new(node_count: usize) -> Self {
        PredecessorMap {
            predecessors: vec![None; node_count],
        }
    }

    /// Returns true if `node` has an entry (possibly `None`)
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.predecessors.len()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
        self.predecessors.iter().copied().enumerate()
    }

    pub(crate) fn set(&mut self, node: NodeId, predecessor: NodeId) {
        self.predecessors[node] = Some(predecessor);
    }
}

impl From<Vec<Option<NodeId>>> for PredecessorMap {
    fn from(predecessors: Vec<Option<NodeId>>) -> Self {
        PredecessorMap { predecessors }
    }
}

/// Counters collected during one shortest path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Queue entries that were expanded
    pub nodes_settled: usize,
    /// Relaxations that improved a distance
    pub edges_relaxed: usize,
    pub heap_pushes: usize,
    /// Queue entries discarded because a cheaper distance was already recorded
    pub stale_entries_skipped: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Distances from source to each node
    pub distances: DistanceMap,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: PredecessorMap,

    /// Source node ID
    pub source: NodeId,

    pub stats: SearchStats,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes.
    /// The path is empty when the target is unreachable.
    fn get_path(&self, result: &ShortestPathResult, target: NodeId) -> Result<Path> {
        reconstruct(&result.predecessors, result.source, target)
    }
}
