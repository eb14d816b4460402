use crate::{
    graph::Graph,
    types::{NodeId, Weight},
};

/// Lower bound of the remaining cost from `node` to `end`.
///
/// The search is only optimal when the estimate never exceeds the true
/// remaining cost.
pub trait AStarHeuristic {
    fn estimate(&self, graph: &impl Graph, node: NodeId, end: NodeId) -> Weight;
}

/// Straight-line distance in kilometers. Admissible as long as every edge
/// weighs at least the great-circle distance between its endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineHeuristic;

impl AStarHeuristic for HaversineHeuristic {
    fn estimate(&self, graph: &impl Graph, node: NodeId, end: NodeId) -> Weight {
        match (graph.node_position(node), graph.node_position(end)) {
            (Some(from), Some(to)) => from.haversine_distance(&to),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::base_graph::BaseGraph;

    use super::*;

    #[test]
    fn estimate_is_the_great_circle_distance() {
        let mut graph = BaseGraph::with_capacity(2).unwrap();
        graph.add_node(0.0, 0.0, "a").unwrap();
        graph.add_node(0.0, 1.0, "b").unwrap();

        let estimate = HaversineHeuristic.estimate(&graph, 0, 1);
        assert!((estimate - 111.194_926_6).abs() < 1e-6);
        assert_eq!(HaversineHeuristic.estimate(&graph, 1, 1), 0.0);
    }

    #[test]
    fn unknown_nodes_estimate_zero() {
        let mut graph = BaseGraph::with_capacity(1).unwrap();
        graph.add_node(10.0, 10.0, "a").unwrap();

        assert_eq!(HaversineHeuristic.estimate(&graph, 0, 42), 0.0);
    }
}
