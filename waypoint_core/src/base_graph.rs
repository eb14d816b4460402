use serde::Serialize;
use tracing::warn;

use crate::constants::{MAX_EDGE_LABEL_LEN, MAX_NODE_NAME_LEN};
use crate::error::GraphError;
use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::graph_edge::GraphEdge;
use crate::types::{NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: NodeId,
    position: GeoPoint,
    name: String,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed-capacity road network. Nodes get dense ids in insertion order and
/// own their outgoing edges.
#[derive(Debug)]
pub struct BaseGraph {
    capacity: usize,
    nodes: Vec<Node>,
    adjacency_list: Vec<Vec<GraphEdge>>,
    edge_count: usize,
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

impl BaseGraph {
    pub fn with_capacity(capacity: usize) -> Result<BaseGraph, GraphError> {
        Self::with_reserved_capacity(capacity, capacity)
    }

    /// Accepts up to `capacity` nodes but only reserves room for `reserved`
    /// of them, the rest is allocated as nodes are added.
    pub(crate) fn with_reserved_capacity(
        capacity: usize,
        reserved: usize,
    ) -> Result<BaseGraph, GraphError> {
        if capacity == 0 {
            return Err(GraphError::InvalidCapacity(0));
        }

        let reserved = reserved.min(capacity);
        let mut nodes = Vec::new();
        let mut adjacency_list = Vec::new();
        nodes
            .try_reserve_exact(reserved)
            .and_then(|_| adjacency_list.try_reserve_exact(reserved))
            .map_err(|_| GraphError::AllocationFailed { capacity })?;

        Ok(BaseGraph {
            capacity,
            nodes,
            adjacency_list,
            edge_count: 0,
        })
    }

    /// Same as [`BaseGraph::with_capacity`] for callers holding a signed count.
    pub fn try_with_capacity(capacity: i64) -> Result<BaseGraph, GraphError> {
        match usize::try_from(capacity) {
            Ok(capacity) if capacity > 0 => Self::with_capacity(capacity),
            _ => Err(GraphError::InvalidCapacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Adds a node and returns its id. Names longer than
    /// [`MAX_NODE_NAME_LEN`] characters are truncated.
    pub fn add_node(&mut self, lat: f64, lng: f64, name: &str) -> Result<NodeId, GraphError> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.nodes
            .try_reserve(1)
            .and_then(|_| self.adjacency_list.try_reserve(1))
            .map_err(|_| GraphError::AllocationFailed {
                capacity: self.capacity,
            })?;

        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            position: GeoPoint::new(lat, lng),
            name: truncate(name, MAX_NODE_NAME_LEN),
        });
        self.adjacency_list.push(Vec::new());

        Ok(id)
    }

    /// Adds a directed edge. The graph is left untouched on failure.
    pub fn add_edge(
        &mut self,
        from_node: NodeId,
        to_node: NodeId,
        weight: Weight,
        label: Option<&str>,
    ) -> Result<(), GraphError> {
        if !self.is_valid_node(from_node) {
            return Err(GraphError::InvalidNode(from_node));
        }

        if !self.is_valid_node(to_node) {
            return Err(GraphError::InvalidNode(to_node));
        }

        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let label = label.map(|label| truncate(label, MAX_EDGE_LABEL_LEN));
        self.adjacency_list[from_node].push(GraphEdge::new(to_node, weight, label));
        self.edge_count += 1;

        Ok(())
    }

    /// Adds `a -> b` then `b -> a`.
    ///
    /// There is no rollback: if the second half is rejected the first one stays
    /// in the graph, so an error does not mean the graph is unchanged.
    pub fn add_bidirectional_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Weight,
        label: Option<&str>,
    ) -> Result<(), GraphError> {
        self.add_edge(a, b, weight, label)?;
        self.add_edge(b, a, weight, label).inspect_err(|error| {
            warn!(from = b, to = a, %error, "only one direction of the edge was added");
        })
    }
}

impl Graph for BaseGraph {
    // Most recently added edge first
    type EdgeIterator<'a> = std::iter::Rev<std::slice::Iter<'a, GraphEdge>>;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    fn node_edges(&self, node: NodeId) -> Option<Self::EdgeIterator<'_>> {
        self.adjacency_list.get(node).map(|edges| edges.iter().rev())
    }
}
