use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use waypoint_core::{
    base_graph::BaseGraph,
    graph::Graph,
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
};

use crate::{info::format_graph_summary, route::format_path_result};

const MAP_CAPACITY: usize = 100;

pub fn run(maps: &[PathBuf]) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(maps, stdin.lock(), stdout.lock())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> anyhow::Result<usize> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }

    let line = line.trim();
    line.parse()
        .with_context(|| format!("'{line}' is not a valid number"))
}

pub fn run_session<R: BufRead, W: Write>(
    maps: &[PathBuf],
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "Please choose a map to load:")?;
    for (position, map) in maps.iter().enumerate() {
        writeln!(output, "  {}. {}", position + 1, map.display())?;
    }

    let choice = prompt(
        &mut input,
        &mut output,
        &format!("Enter choice (1-{}): ", maps.len()),
    )?;
    let map = choice
        .checked_sub(1)
        .and_then(|index| maps.get(index))
        .ok_or_else(|| anyhow!("invalid choice, enter a number between 1 and {}", maps.len()))?;

    writeln!(output, "\nLoading '{}'...", map.display())?;
    let graph = BaseGraph::from_road_network_file_with_capacity(map, MAP_CAPACITY)
        .with_context(|| format!("failed to load map {}", map.display()))?;
    write!(output, "{}", format_graph_summary(&graph))?;

    let last_node = graph.node_count().saturating_sub(1);
    let start = prompt(
        &mut input,
        &mut output,
        &format!("\nEnter start node (0-{last_node}): "),
    )?;
    let end = prompt(
        &mut input,
        &mut output,
        &format!("Enter destination node (0-{last_node}): "),
    )?;

    writeln!(output, "\nCalculating route from node {start} to node {end}...")?;
    if !graph.is_valid_node(start) || !graph.is_valid_node(end) {
        writeln!(output, "Invalid start or destination node id")?;
        return Ok(());
    }

    let result = Dijkstra::new().calc_path(&graph, start, end)?;
    write!(output, "{}", format_path_result(&graph, &result))?;

    Ok(())
}
