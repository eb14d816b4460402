use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base_graph::BaseGraph;
use crate::error::{LoadError, RoutingError};
use crate::geopoint::GeoPoint;
use crate::location_index::LocationIndex;
use crate::routing::path_result::PathResult;
use crate::routing::shortest_path_algorithm::RoutingAlgorithm;
use crate::stopwatch::Stopwatch;
use crate::types::NodeId;

/// Either end of a route: a node id, or coordinates snapped to the closest node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoutePoint {
    Node(NodeId),
    Coordinates(GeoPoint),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingRequest {
    pub start: RoutePoint,
    pub end: RoutePoint,
    #[serde(default)]
    pub algorithm: RoutingAlgorithm,
}

pub struct Navigator {
    graph: BaseGraph,
    index: LocationIndex,
}

impl Navigator {
    pub fn new(graph: BaseGraph) -> Navigator {
        let index = LocationIndex::build_from_graph(&graph);
        Navigator { graph, index }
    }

    pub fn from_road_network_file(path: impl AsRef<Path>) -> Result<Navigator, LoadError> {
        let graph = BaseGraph::from_road_network_file(path)?;
        Ok(Navigator::new(graph))
    }

    pub fn graph(&self) -> &BaseGraph {
        &self.graph
    }

    /// Node ids are passed through unchecked, the search validates them.
    pub fn resolve(&self, point: &RoutePoint) -> Result<NodeId, RoutingError> {
        match point {
            RoutePoint::Node(node_id) => Ok(*node_id),
            RoutePoint::Coordinates(coordinates) => self
                .index
                .closest_node(coordinates)
                .ok_or(RoutingError::NoNearbyNode {
                    lat: coordinates.lat,
                    lng: coordinates.lng,
                }),
        }
    }

    pub fn route(&self, request: &RoutingRequest) -> Result<PathResult, RoutingError> {
        let snap_sw = Stopwatch::new("navigator/resolve");
        let start = self.resolve(&request.start)?;
        let end = self.resolve(&request.end)?;
        snap_sw.report();

        request.algorithm.calc_path(&self.graph, start, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_graph_utils::test_graph::{create_disconnected_graph, create_grid_graph};

    use super::*;

    #[test]
    fn routes_between_node_ids() {
        let navigator = Navigator::new(create_grid_graph(4, 4, 0.01));

        for algorithm in [RoutingAlgorithm::Dijkstra, RoutingAlgorithm::AStar] {
            let result = navigator
                .route(&RoutingRequest {
                    start: RoutePoint::Node(0),
                    end: RoutePoint::Node(15),
                    algorithm,
                })
                .unwrap();

            assert!(result.is_found());
            assert_eq!(result.start(), Some(0));
            assert_eq!(result.end(), Some(15));
            assert_eq!(result.len(), 7);
        }
    }

    #[test]
    fn coordinates_snap_to_closest_node() {
        let navigator = Navigator::new(create_grid_graph(4, 4, 0.01));

        let result = navigator
            .route(&RoutingRequest {
                start: RoutePoint::Coordinates(GeoPoint::new(29.999, 77.999)),
                end: RoutePoint::Coordinates(GeoPoint::new(30.0301, 78.0302)),
                algorithm: RoutingAlgorithm::AStar,
            })
            .unwrap();

        assert_eq!(result.start(), Some(0));
        assert_eq!(result.end(), Some(15));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let navigator = Navigator::new(create_disconnected_graph());

        let error = navigator
            .route(&RoutingRequest {
                start: RoutePoint::Node(0),
                end: RoutePoint::Node(42),
                algorithm: RoutingAlgorithm::Dijkstra,
            })
            .unwrap_err();

        assert_eq!(error, RoutingError::InvalidEnd(42));
    }

    #[test]
    fn unreachable_node_is_not_found() {
        let navigator = Navigator::new(create_disconnected_graph());

        let result = navigator
            .route(&RoutingRequest {
                start: RoutePoint::Node(0),
                end: RoutePoint::Node(3),
                algorithm: RoutingAlgorithm::Dijkstra,
            })
            .unwrap();

        assert!(!result.is_found());
    }

    #[test]
    fn empty_graph_cannot_resolve_coordinates() {
        let navigator = Navigator::new(BaseGraph::with_capacity(1).unwrap());

        let error = navigator
            .resolve(&RoutePoint::Coordinates(GeoPoint::new(1.0, 2.0)))
            .unwrap_err();

        assert_eq!(error, RoutingError::NoNearbyNode { lat: 1.0, lng: 2.0 });
    }
}
