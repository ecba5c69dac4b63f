use std::cmp::Ordering;
use std::collections::BinaryHeap;

use algofind_core::Point;

/// An entry in the open list, ordered by `priority` then insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Open {
    pub(crate) pos: Point,
    pub(crate) priority: f64,
    seq: u64,
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest pushed entry.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open {}

/// Min-priority queue with stable (first-in wins) tie-breaking.
///
/// Entries are never removed or updated in place; searches skip stale
/// entries for cells they have already closed.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<Open>,
    next_seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Point, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Open { pos, priority, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Open> {
        self.heap.pop()
    }
}
