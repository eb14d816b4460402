use serde::Serialize;

use crate::types::{NodeId, Weight};

/// Outcome of a shortest path search.
///
/// `nodes` runs from start to end inclusive and is empty when no path was
/// found. `total_weight` is only meaningful when `found` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathResult {
    found: bool,
    nodes: Vec<NodeId>,
    total_weight: Weight,
}

impl PathResult {
    pub(crate) fn new(nodes: Vec<NodeId>, total_weight: Weight) -> Self {
        PathResult {
            found: true,
            nodes,
            total_weight,
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Frees the node sequence and marks the result as not found. Safe to
    /// call any number of times.
    pub fn release(&mut self) {
        self.nodes = Vec::new();
        self.found = false;
        self.total_weight = 0.0;
    }
}
