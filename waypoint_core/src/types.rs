/// Dense, zero-based node identifier. Ids are assigned in insertion order.
pub type NodeId = usize;

/// Edge and path cost. Usually kilometers, but any non-negative cost works.
pub type Weight = f64;
