use std::cmp::Ordering;

use crate::graphs::{Distance, Node};

#[derive(Clone, Debug)]
pub struct QueueEntry {
    pub distance: Distance,
    pub node: Node,
}

impl QueueEntry {
    pub fn new(distance: Distance, node: Node) -> QueueEntry {
        QueueEntry { distance, node }
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on distances. Ties go to the
        // lexicographically smaller node, so equal-cost candidates are
        // settled in the same order on every run.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}
