use std::collections::VecDeque;

use log::warn;

use crate::algorithm::PredecessorMap;
use crate::graph::Graph;
use crate::{Distance, Error, NodeId, Path, Result};

/// Rebuilds the path from `source` to `target` by following predecessors
/// back from `target`.
///
/// Returns an empty path when the walk ends somewhere other than `source`,
/// i.e. when `target` is unreachable.
pub fn reconstruct(predecessors: &PredecessorMap, source: NodeId, target: NodeId) -> Result<Path> {
    if !predecessors.contains(target) {
        return Err(Error::UnknownNode(target));
    }

    let mut path = VecDeque::new();
    let mut current = target;
    loop {
        path.push_front(current);

        // A well-formed map never needs more steps than it has entries
        if path.len() > predecessors.len() {
            warn!(
                "Predecessor cycle detected while reconstructing path to {}",
                target
            );
            return Ok(Vec::new());
        }

        match predecessors.predecessor(current) {
            Some(pred) => current = pred,
            None => break,
        }
    }

    if current != source {
        return Ok(Vec::new());
    }

    Ok(path.into())
}

/// Sums edge weights along `path`.
///
/// Returns `None` if two consecutive nodes are not joined by an edge. Empty and
/// single-node paths cost nothing.
pub fn path_weight<G: Graph>(graph: &G, path: &[NodeId]) -> Option<Distance> {
    path.windows(2).try_fold(0, |total: Distance, hop| {
        graph
            .get_edge_weight(hop[0], hop[1])
            .map(|w| total.saturating_add(w))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    #[test]
    fn source_alone_is_a_single_node_path() {
        let preds = PredecessorMap::from(vec![None, Some(0)]);
        assert_eq!(reconstruct(&preds, 0, 0).unwrap(), vec![0]);
    }

    #[test]
    fn follows_predecessors_back_to_source() {
        let preds = PredecessorMap::from(vec![None, Some(0), Some(1), Some(2)]);
        assert_eq!(reconstruct(&preds, 0, 3).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn chain_ending_elsewhere_is_unreachable() {
        // 3 leads back to 1, which is a root other than the source 0
        let preds = PredecessorMap::from(vec![None, None, Some(1), Some(2)]);
        assert!(reconstruct(&preds, 0, 3).unwrap().is_empty());
        assert!(reconstruct(&preds, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn untracked_target_fails() {
        let preds = PredecessorMap::from(vec![None, Some(0)]);
        assert_eq!(reconstruct(&preds, 0, 5).unwrap_err(), Error::UnknownNode(5));
    }

    #[test]
    fn cyclic_map_yields_empty_path() {
        let preds = PredecessorMap::from(vec![None, Some(2), Some(1)]);
        assert!(reconstruct(&preds, 0, 1).unwrap().is_empty());
    }

    #[test]
    fn path_weight_sums_existing_edges() {
        let mut graph = DirectedGraph::with_nodes(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 2, 3).unwrap();

        assert_eq!(path_weight(&graph, &[0, 1, 2]), Some(8));
        assert_eq!(path_weight(&graph, &[2]), Some(0));
        assert_eq!(path_weight(&graph, &[]), Some(0));
        assert_eq!(path_weight(&graph, &[2, 1]), None);
    }
}
