use log::debug;

use crate::algorithm::{DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::Graph;
use crate::{Error, NodeId, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: NodeId) -> Result<ShortestPathResult> {
        if !graph.has_node(source) {
            return Err(Error::UnknownNode(source));
        }

        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances = DistanceMap::new(n);
        let mut predecessors = PredecessorMap::new(n);
        let mut stats = SearchStats::default();

        // Distance to source is 0
        distances.set(source, 0);

        let mut queue = DistanceQueue::with_capacity(n);
        queue.push(source, 0);

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // A cheaper entry for u was already expanded
            if distances.get(u).map_or(true, |best| dist_u > best) {
                stats.stale_entries_skipped += 1;
                continue;
            }
            stats.nodes_settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < 0 {
                    return Err(Error::NegativeWeight { from: u, to: v, weight });
                }

                let candidate = dist_u.saturating_add(weight);
                let improves = distances.get(v).map_or(false, |current| candidate < current);

                if improves {
                    distances.set(v, candidate);
                    predecessors.set(v, u);
                    queue.push(v, candidate);
                    stats.edges_relaxed += 1;
                }
            }
        }

        stats.heap_pushes = queue.pushes();
        debug!(
            "Dijkstra from {}: settled {} nodes, relaxed {} edges, skipped {} stale entries",
            source, stats.nodes_settled, stats.edges_relaxed, stats.stale_entries_skipped
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

/// Runs Dijkstra from `source` over `graph`
pub fn shortest_paths<G: Graph>(graph: &G, source: NodeId) -> Result<ShortestPathResult> {
    Dijkstra::new().compute_shortest_paths(graph, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};
    use crate::{Weight, INFINITE_DISTANCE};

    /// Adjacency list that skips the model's insertion checks
    #[derive(Debug)]
    struct RawGraph(Vec<Vec<(NodeId, Weight)>>);

    impl Graph for RawGraph {
        fn node_count(&self) -> usize {
            self.0.len()
        }

        fn edge_count(&self) -> usize {
            self.0.iter().map(Vec::len).sum()
        }

        fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
            Box::new(0..self.0.len())
        }

        fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, Weight)> + '_> {
            Box::new(self.0.get(node).into_iter().flatten().copied())
        }

        fn has_node(&self, node: NodeId) -> bool {
            node < self.0.len()
        }

        fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
            self.get_edge_weight(from, to).is_some()
        }

        fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
            self.0.get(from)?.iter().find(|(t, _)| *t == to).map(|(_, w)| *w)
        }
    }

    #[test]
    fn unknown_source_is_rejected() {
        let graph = DirectedGraph::with_nodes(3);
        assert_eq!(shortest_paths(&graph, 3).unwrap_err(), Error::UnknownNode(3));
    }

    #[test]
    fn negative_weight_fails_fast() {
        let graph = RawGraph(vec![vec![(1, 4)], vec![(2, -2)], vec![]]);
        assert_eq!(
            shortest_paths(&graph, 0).unwrap_err(),
            Error::NegativeWeight { from: 1, to: 2, weight: -2 }
        );
    }

    #[test]
    fn unreachable_negative_edge_is_never_seen() {
        let graph = RawGraph(vec![vec![(1, 4)], vec![], vec![(0, -9)]]);
        let result = shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances.get(1), Some(4));
        assert_eq!(result.distances.get(2), Some(INFINITE_DISTANCE));
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 0 -> 2 is pushed at 10, then improved to 2 through node 1
        let mut graph = DirectedGraph::with_nodes(3);
        graph.add_edge(0, 2, 10).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();

        let result = shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances.get(2), Some(2));
        assert_eq!(result.predecessors.predecessor(2), Some(1));
        assert_eq!(result.stats.stale_entries_skipped, 1);
        assert_eq!(result.stats.nodes_settled, 3);
        assert_eq!(result.stats.heap_pushes, 4);
        assert_eq!(result.stats.edges_relaxed, 3);
    }

    #[test]
    fn zero_weight_edges_are_followed() {
        let mut graph = DirectedGraph::with_nodes(3);
        graph.add_edge(0, 1, 0).unwrap();
        graph.add_edge(1, 2, 0).unwrap();

        let result = shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances.reachable(2), Some(0));
        assert_eq!(result.predecessors.predecessor(2), Some(1));
    }

    #[test]
    fn source_has_no_predecessor_even_on_cycles() {
        let mut graph = DirectedGraph::with_nodes(2);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 0, 3).unwrap();

        let result = shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.predecessors.predecessor(0), None);
        assert_eq!(result.distances.get(0), Some(0));
    }
}
