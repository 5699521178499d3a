//! Cost-ordered frontier for best-first search.
//!
//! Items are stored in a min-heap keyed by `(cost, insertion_order)`.
//! Cheaper items are popped first; ties are broken by insertion order
//! (FIFO), which keeps best-first results identical across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<E> {
    item: E,
    cost: u32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.cost.cmp(&other.cost).then(self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with stable tie-breaking.
#[derive(Debug)]
pub struct PriorityFrontier<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> PriorityFrontier<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item at the given cost.
    pub fn push(&mut self, item: E, cost: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, cost, seq }));
    }

    /// Pop the cheapest item (ties broken FIFO).
    pub fn pop(&mut self) -> Option<E> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Pop the cheapest item together with its cost.
    pub fn pop_with_cost(&mut self) -> Option<(E, u32)> {
        self.heap.pop().map(|Reverse(entry)| (entry.item, entry.cost))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E> Default for PriorityFrontier<E> {
    fn default() -> Self {
        Self::new()
    }
}
