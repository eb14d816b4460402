use crate::types::{NodeId, Weight};

/// Directed arc stored in the adjacency list of its source node.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    end_node: NodeId,
    weight: Weight,
    label: Option<String>,
}

impl GraphEdge {
    pub(crate) fn new(end_node: NodeId, weight: Weight, label: Option<String>) -> Self {
        GraphEdge {
            end_node,
            weight,
            label,
        }
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
