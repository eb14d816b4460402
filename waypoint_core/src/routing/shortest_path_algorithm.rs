use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::RoutingError,
    graph::Graph,
    types::NodeId,
};

use super::{astar::AStar, dijkstra::Dijkstra, path_result::PathResult};

pub trait ShortestPathAlgorithm {
    /// Finds the cheapest route from `start` to `end`.
    ///
    /// An unreachable `end` is not an error: it yields a result that is not
    /// found. Errors are reserved for ids that are not in the graph.
    fn calc_path(
        &self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<PathResult, RoutingError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingAlgorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl RoutingAlgorithm {
    pub fn calc_path(
        self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<PathResult, RoutingError> {
        match self {
            RoutingAlgorithm::Dijkstra => Dijkstra::new().calc_path(graph, start, end),
            RoutingAlgorithm::AStar => AStar::new().calc_path(graph, start, end),
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingAlgorithm::Dijkstra => write!(f, "dijkstra"),
            RoutingAlgorithm::AStar => write!(f, "astar"),
        }
    }
}
