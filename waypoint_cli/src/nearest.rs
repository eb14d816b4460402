use std::path::Path;

use anyhow::{Context, anyhow};
use waypoint_core::{
    base_graph::BaseGraph, geopoint::GeoPoint, graph::Graph, location_index::LocationIndex,
};

pub fn run(map: &Path, coordinates: GeoPoint) -> anyhow::Result<()> {
    let graph = BaseGraph::from_road_network_file(map)
        .with_context(|| format!("failed to load map {}", map.display()))?;
    let index = LocationIndex::build_from_graph(&graph);

    let node = index
        .closest_node(&coordinates)
        .and_then(|node_id| graph.node(node_id))
        .ok_or_else(|| anyhow!("map {} has no nodes", map.display()))?;

    println!(
        "Node {} ({}) is {:.2} km away",
        node.id(),
        node.name(),
        node.position().haversine_distance(&coordinates)
    );

    Ok(())
}
