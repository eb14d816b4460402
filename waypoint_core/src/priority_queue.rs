use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::{NodeId, Weight};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    priority: Weight,
    /// Insertion order, breaks ties between equal priorities
    sequence: u64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip priority and sequence to make this a FIFO min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority frontier of pending nodes.
///
/// There is no decrease-key: a node whose cost improves is pushed again, and
/// the older entry stays in the queue. Callers must recognise those stale
/// entries when they come out.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<HeapItem>,
    next_sequence: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, node_id: NodeId, priority: Weight) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(HeapItem {
            node_id,
            priority,
            sequence,
        });
    }

    /// Removes the entry with the smallest priority. Equal priorities come out
    /// in insertion order.
    pub fn pop(&mut self) -> Option<(NodeId, Weight)> {
        self.heap.pop().map(|item| (item.node_id, item.priority))
    }

    pub fn peek(&self) -> Option<(NodeId, Weight)> {
        self.heap.peek().map(|item| (item.node_id, item.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}
