use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use serde::Serialize;
use waypoint_core::{
    base_graph::{BaseGraph, Node},
    geopoint::GeoPoint,
    graph::Graph,
    navigator::{Navigator, RoutePoint, RoutingRequest},
    routing::{path_result::PathResult, shortest_path_algorithm::RoutingAlgorithm},
    types::{NodeId, Weight},
};

use crate::parsers;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Algorithm {
    Dijkstra,
    Astar,
}

impl From<Algorithm> for RoutingAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Dijkstra => RoutingAlgorithm::Dijkstra,
            Algorithm::Astar => RoutingAlgorithm::AStar,
        }
    }
}

#[derive(Args)]
pub struct RouteArgs {
    /// Road network file
    #[arg(short, long, env = "WAYPOINT_MAP")]
    map: PathBuf,

    /// Start node id
    #[arg(long, conflicts_with = "from_coords")]
    from: Option<NodeId>,

    /// Destination node id
    #[arg(long, conflicts_with = "to_coords")]
    to: Option<NodeId>,

    /// Start coordinates as "lat,lng", snapped to the closest node
    #[arg(long, value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    from_coords: Option<GeoPoint>,

    /// Destination coordinates as "lat,lng", snapped to the closest node
    #[arg(long, value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    to_coords: Option<GeoPoint>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Dijkstra)]
    algorithm: Algorithm,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RouteReport<'a> {
    algorithm: RoutingAlgorithm,
    found: bool,
    total_weight: Weight,
    nodes: Vec<&'a Node>,
}

fn route_point(
    node: Option<NodeId>,
    coordinates: Option<GeoPoint>,
    flag: &str,
) -> anyhow::Result<RoutePoint> {
    match (node, coordinates) {
        (Some(node_id), _) => Ok(RoutePoint::Node(node_id)),
        (None, Some(coordinates)) => Ok(RoutePoint::Coordinates(coordinates)),
        (None, None) => bail!("either --{flag} or --{flag}-coords is required"),
    }
}

pub fn run(args: RouteArgs) -> anyhow::Result<()> {
    let request = RoutingRequest {
        start: route_point(args.from, args.from_coords, "from")?,
        end: route_point(args.to, args.to_coords, "to")?,
        algorithm: args.algorithm.into(),
    };

    let navigator = Navigator::from_road_network_file(&args.map)
        .with_context(|| format!("failed to load map {}", args.map.display()))?;
    let result = navigator.route(&request)?;

    if args.json {
        let report = RouteReport {
            algorithm: request.algorithm,
            found: result.is_found(),
            total_weight: result.total_weight(),
            nodes: result
                .nodes()
                .iter()
                .filter_map(|node_id| navigator.graph().node(*node_id))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_path_result(navigator.graph(), &result));
    }

    Ok(())
}

pub fn format_path_result(graph: &BaseGraph, result: &PathResult) -> String {
    if !result.is_found() {
        return String::from("No path found\n");
    }

    let mut output = format!(
        "Total distance: {:.2} km\nRoute:\n",
        result.total_weight()
    );
    for (position, node_id) in result.nodes().iter().enumerate() {
        let name = graph.node(*node_id).map(Node::name).unwrap_or_default();
        output.push_str(&format!("  {}. Node {} ({})\n", position + 1, node_id, name));
    }

    output
}
