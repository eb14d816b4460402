use tracing::error;

use crate::{constants::INVALID_NODE, types::NodeId};

/// Walks `parents` back from `end` and returns the route from `start` to
/// `end`, both inclusive.
///
/// Returns `None` when the chain does not lead back to `start`: it ends on
/// another root, points outside the array or loops. A search never produces
/// such a chain, so this is logged as an error.
pub(crate) fn build_node_path(parents: &[NodeId], start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
    let mut length = 0;
    let mut node = end;

    while node != INVALID_NODE {
        let Some(&parent) = parents.get(node) else {
            error!(start, end, node, "predecessor chain leaves the search space");
            return None;
        };

        length += 1;
        if length > parents.len() {
            error!(start, end, "predecessor chain contains a cycle");
            return None;
        }

        node = parent;
    }

    let mut path = vec![INVALID_NODE; length];
    let mut node = end;
    for slot in path.iter_mut().rev() {
        *slot = node;
        node = parents[node];
    }

    if path.first() != Some(&start) {
        error!(
            start,
            end,
            root = ?path.first(),
            "predecessor chain is not rooted at the start node"
        );
        return None;
    }

    Some(path)
}
