use rstar::RTree;
use rstar::primitives::GeomWithData;
use tracing::debug;

use crate::geopoint::GeoPoint;
use crate::graph::Graph;
use crate::types::NodeId;

// Nodes live on the unit sphere, so the nearest point in 3D is also the
// nearest one by great-circle distance
type IndexedNode = GeomWithData<[f64; 3], NodeId>;

/// Spatial index answering "which node is closest to this coordinate".
pub struct LocationIndex {
    tree: RTree<IndexedNode>,
}

impl LocationIndex {
    pub fn build_from_graph(graph: &impl Graph) -> LocationIndex {
        let nodes: Vec<IndexedNode> = (0..graph.node_count())
            .filter_map(|node_id| {
                graph
                    .node_position(node_id)
                    .map(|position| IndexedNode::new(position.unit_vector(), node_id))
            })
            .collect();

        debug!(nodes = nodes.len(), "building location index");

        LocationIndex {
            tree: RTree::bulk_load(nodes),
        }
    }

    pub fn closest_node(&self, coordinates: &GeoPoint) -> Option<NodeId> {
        self.tree
            .nearest_neighbor(&coordinates.unit_vector())
            .map(|nearest| nearest.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
