use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{Distance, NodeId};

/// Min-priority queue of `(node, tentative distance)` entries for Dijkstra.
///
/// Entries are ordered by distance, then by node id, so equal distances always
/// pop in the same order. There is no decrease-key: a node may sit in the queue
/// several times and callers discard the stale copies when they pop them.
#[derive(Debug, Default)]
pub struct DistanceQueue {
    heap: BinaryHeap<Reverse<(Distance, NodeId)>>,
    pushes: usize,
}

impl DistanceQueue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of entries ever pushed
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, node: NodeId, distance: Distance) {
        self.pushes += 1;
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(NodeId, Distance)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    pub fn peek(&self) -> Option<(NodeId, Distance)> {
        self.heap.peek().map(|Reverse((distance, node))| (*node, *distance))
    }
}
