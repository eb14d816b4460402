use crate::{base_graph::Node, geopoint::GeoPoint, graph_edge::GraphEdge, types::NodeId};

/// Read-only view of a road network used by the routing algorithms.
///
/// Lookups on an id outside `[0, node_count)` return `None` instead of
/// panicking.
pub trait Graph {
    type EdgeIterator<'a>: Iterator<Item = &'a GraphEdge>
    where
        Self: 'a;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn node(&self, node: NodeId) -> Option<&Node>;

    /// Outgoing edges of `node`.
    fn node_edges(&self, node: NodeId) -> Option<Self::EdgeIterator<'_>>;

    fn is_valid_node(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    fn node_position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node(node).map(Node::position)
    }
}
