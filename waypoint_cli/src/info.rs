use std::path::Path;

use anyhow::Context;
use comfy_table::Table;
use waypoint_core::{base_graph::BaseGraph, graph::Graph};

pub fn run(map: &Path) -> anyhow::Result<()> {
    let graph = BaseGraph::from_road_network_file(map)
        .with_context(|| format!("failed to load map {}", map.display()))?;

    print!("{}", format_graph_summary(&graph));

    Ok(())
}

pub fn format_graph_summary(graph: &BaseGraph) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Node", "Name", "Latitude", "Longitude", "Edges"]);

    for node in graph.nodes() {
        let edges: Vec<String> = graph
            .node_edges(node.id())
            .into_iter()
            .flatten()
            .map(|edge| format!("[{}]({:.2}km)", edge.end_node(), edge.weight()))
            .collect();

        table.add_row(vec![
            node.id().to_string(),
            node.name().to_string(),
            format!("{:.4}", node.position().lat),
            format!("{:.4}", node.position().lng),
            edges.join(" "),
        ]);
    }

    format!(
        "Nodes: {}, Edges: {}\n{table}\n",
        graph.node_count(),
        graph.edge_count()
    )
}
