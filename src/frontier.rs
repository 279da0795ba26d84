use crate::branch_node::SubproblemNode;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Node waiting in the frontier, keyed by the bound estimate it was pushed with and the order of
/// insertion
pub struct FrontierEntry {
    pub priority: f64,
    pub sequence: u64,
    pub node: SubproblemNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // BinaryHeap is a max-heap, reversed so the smallest key and then the oldest entry is on top
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of unexplored nodes, FIFO among equal priorities.
///
/// The sequence counter belongs to the frontier, so two searches never share it and the order is
/// fully determined by the pushes.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a node and returns the sequence number it was given
    pub fn push(&mut self, priority: f64, node: SubproblemNode) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            node,
        });
        sequence
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes so far
    pub const fn total_pushed(&self) -> u64 {
        self.next_sequence
    }
}
