use crate::types::NodeId;

/// Marks "no predecessor" in a search and "no node" in general.
pub const INVALID_NODE: NodeId = NodeId::MAX;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

pub const MAX_NODE_NAME_LEN: usize = 59;
pub const MAX_EDGE_LABEL_LEN: usize = 29;
