use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, NodeId, Result, Weight};
use std::collections::BTreeMap;

/// A directed graph stored as an arena of adjacency maps.
///
/// Node identifiers are indices into `adjacency`, so they stay dense from
/// `0` to `node_count() - 1`. Every neighbor referenced by an edge is itself a
/// node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outgoing edges for each node: node_id -> {target_node -> weight}
    adjacency: Vec<BTreeMap<NodeId, Weight>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with nodes `0..nodes` and no edges
    pub fn with_nodes(nodes: usize) -> Self {
        DirectedGraph {
            adjacency: vec![BTreeMap::new(); nodes],
        }
    }

    /// Returns the neighbor map of a node
    pub fn neighbors(&self, node: NodeId) -> Result<&BTreeMap<NodeId, Weight>> {
        self.adjacency.get(node).ok_or(Error::UnknownNode(node))
    }

    /// Returns the number of outgoing edges of a node
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        self.neighbors(node).map(BTreeMap::len)
    }

    /// Iterates over every edge as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |(&to, &w)| (from, to, w)))
    }

    fn ensure_node(&mut self, node: NodeId) {
        if node >= self.adjacency.len() {
            self.adjacency.resize_with(node + 1, BTreeMap::new);
        }
    }
}

impl Graph for DirectedGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(0..self.adjacency.len())
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, Weight)> + '_> {
        match self.adjacency.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(&to, &w)| (to, w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.adjacency.get(from)?.get(&to).copied()
    }
}

impl MutableGraph for DirectedGraph {
    fn add_node(&mut self) -> NodeId {
        let new_id = self.adjacency.len();
        self.adjacency.push(BTreeMap::new());
        new_id
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<Option<Weight>> {
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        if weight < 0 {
            return Err(Error::NegativeWeight { from, to, weight });
        }

        // Registering the larger id also registers everything below it
        self.ensure_node(from.max(to));
        Ok(self.adjacency[from].insert(to, weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_nodes_has_empty_adjacency() {
        let graph = DirectedGraph::with_nodes(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_ids().all(|n| graph.neighbors(n).unwrap().is_empty()));
    }

    #[test]
    fn add_node_appends_dense_ids() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.add_node(), 0);
        assert_eq!(graph.add_node(), 1);
        graph.add_edge(1, 0, 3).unwrap();

        assert_eq!(graph.add_node(), 2);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn neighbors_of_unknown_node_fails() {
        let graph = DirectedGraph::with_nodes(2);
        assert_eq!(graph.neighbors(2), Err(Error::UnknownNode(2)));
        assert!(!graph.has_node(2));
    }

    #[test]
    fn add_edge_registers_missing_endpoints() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(0, 3, 7).unwrap();

        assert_eq!(graph.node_count(), 4);
        for node in graph.node_ids() {
            for (&to, _) in graph.neighbors(node).unwrap() {
                assert!(graph.has_node(to));
            }
        }
        assert!(graph.neighbors(3).unwrap().is_empty());
        assert_eq!(graph.get_edge_weight(0, 3), Some(7));
    }

    #[test]
    fn add_edge_is_directed_and_last_write_wins() {
        let mut graph = DirectedGraph::with_nodes(2);
        assert_eq!(graph.add_edge(0, 1, 10), Ok(None));
        assert_eq!(graph.add_edge(0, 1, 4), Ok(Some(10)));

        assert_eq!(graph.get_edge_weight(0, 1), Some(4));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_rejects_self_loops_and_negative_weights() {
        let mut graph = DirectedGraph::with_nodes(3);
        assert_eq!(graph.add_edge(1, 1, 5), Err(Error::SelfLoop(1)));
        assert_eq!(
            graph.add_edge(0, 2, -3),
            Err(Error::NegativeWeight { from: 0, to: 2, weight: -3 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_iterates_in_node_order() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(1, 0, 2).unwrap();
        graph.add_edge(0, 2, 9).unwrap();
        graph.add_edge(0, 1, 1).unwrap();

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 1), (0, 2, 9), (1, 0, 2)]);
        assert_eq!(graph.out_degree(0), Ok(2));
    }
}
