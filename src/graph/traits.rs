use std::fmt::Debug;

use crate::{NodeId, Result, Weight};

/// Trait representing a weighted directed graph
pub trait Graph: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every node identifier, in ascending order
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Returns an iterator over the outgoing edges from a node.
    /// Unknown nodes yield no edges.
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, Weight)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: NodeId) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight>;
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a node to the graph and returns its ID
    fn add_node(&mut self) -> NodeId;

    /// Adds or overwrites the directed edge `from -> to`.
    ///
    /// Endpoints that are not yet part of the graph are registered with an
    /// empty neighbor set. Returns the previous weight if the edge existed.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<Option<Weight>>;
}
