//! Line oriented road network format.
//!
//! ```text
//! # comment
//! <node_count> <edge_count>
//! <lat> <lng> <name...>
//! <from> <to> [weight [label...]]
//! ```
//!
//! Blank lines and lines starting with `#` are ignored anywhere. Node ids in
//! edge lines are relative to the first node of the file. Every edge is added
//! in both directions; a missing or non-positive weight is replaced by the
//! great-circle distance between the two nodes.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::base_graph::BaseGraph;
use crate::error::{GraphError, LoadError};
use crate::graph::Graph;
use crate::types::{NodeId, Weight};

// Most nodes reserved up front from a header count
const MAX_RESERVED_NODES: usize = 4096;

struct ContentLines<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        ContentLines {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, LoadError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return Ok(Some((self.line_no, line)));
        }

        Ok(None)
    }
}

fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], &text[index..]),
        None => (text, ""),
    }
}

fn parse_token<T: FromStr>(line: usize, token: &str, field: &str) -> Result<T, LoadError> {
    if token.is_empty() {
        return Err(LoadError::Parse {
            line,
            message: format!("missing {field}"),
        });
    }

    token.parse().map_err(|_| LoadError::Parse {
        line,
        message: format!("invalid {field} '{token}'"),
    })
}

fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize), LoadError> {
    let (nodes, rest) = split_token(line);
    let (edges, _) = split_token(rest);
    Ok((
        parse_token(line_no, nodes, "node count")?,
        parse_token(line_no, edges, "edge count")?,
    ))
}

fn read_header<R: BufRead>(lines: &mut ContentLines<R>) -> Result<(usize, usize), LoadError> {
    let (line_no, header) = lines.next_content()?.ok_or(LoadError::MissingHeader)?;
    parse_header(line_no, &header)
}

fn next_line<R: BufRead>(
    lines: &mut ContentLines<R>,
    section: &'static str,
    expected: usize,
    found: usize,
) -> Result<(usize, String), LoadError> {
    lines.next_content()?.ok_or(LoadError::UnexpectedEof {
        section,
        expected,
        found,
    })
}

struct EdgeLine<'a> {
    from: NodeId,
    to: NodeId,
    weight: Option<Weight>,
    label: Option<&'a str>,
}

fn parse_edge_line(line_no: usize, line: &str) -> Result<EdgeLine<'_>, LoadError> {
    let (from, rest) = split_token(line);
    let (to, rest) = split_token(rest);
    let (weight, rest) = split_token(rest);
    let label = rest.trim();

    Ok(EdgeLine {
        from: parse_token(line_no, from, "source node")?,
        to: parse_token(line_no, to, "destination node")?,
        weight: if weight.is_empty() {
            None
        } else {
            Some(parse_token(line_no, weight, "weight")?)
        },
        label: (!label.is_empty()).then_some(label),
    })
}

fn great_circle_weight(graph: &BaseGraph, from: NodeId, to: NodeId) -> Result<Weight, GraphError> {
    let from = graph
        .node_position(from)
        .ok_or(GraphError::InvalidNode(from))?;
    let to = graph.node_position(to).ok_or(GraphError::InvalidNode(to))?;
    Ok(from.haversine_distance(&to))
}

/// Reads a road network into `graph`.
///
/// Stops at the first error. Nodes and edges read before it stay in the
/// graph.
pub fn load_road_network<R: BufRead>(graph: &mut BaseGraph, reader: R) -> Result<(), LoadError> {
    let mut lines = ContentLines::new(reader);
    let (node_count, edge_count) = read_header(&mut lines)?;

    let available = graph.capacity() - graph.node_count();
    if node_count > available {
        return Err(LoadError::TooManyNodes {
            declared: node_count,
            available,
        });
    }

    let first_node = graph.node_count();

    for loaded in 0..node_count {
        let (line_no, line) = next_line(&mut lines, "node", node_count, loaded)?;
        let (lat, rest) = split_token(&line);
        let (lng, name) = split_token(rest);
        let lat = parse_token(line_no, lat, "latitude")?;
        let lng = parse_token(line_no, lng, "longitude")?;
        graph.add_node(lat, lng, name.trim())?;
    }

    for loaded in 0..edge_count {
        let (line_no, line) = next_line(&mut lines, "edge", edge_count, loaded)?;
        let edge = parse_edge_line(line_no, &line)?;
        let node_in_file = |id: NodeId| {
            if id < node_count {
                Ok(first_node + id)
            } else {
                Err(LoadError::Edge {
                    line: line_no,
                    source: GraphError::InvalidNode(id),
                })
            }
        };
        let from = node_in_file(edge.from)?;
        let to = node_in_file(edge.to)?;

        match edge.weight {
            Some(weight) if weight > 0.0 => Ok(weight),
            _ => great_circle_weight(graph, from, to),
        }
        .and_then(|weight| graph.add_bidirectional_edge(from, to, weight, edge.label))
        .map_err(|source| LoadError::Edge {
            line: line_no,
            source,
        })?;
    }

    info!(
        nodes = node_count,
        edges = edge_count,
        "loaded road network"
    );

    Ok(())
}

impl BaseGraph {
    /// Loads a road network into a graph sized to the node count in its header.
    pub fn from_road_network_file(path: impl AsRef<Path>) -> Result<BaseGraph, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        BaseGraph::from_road_network_str(&contents)
    }

    /// Loads a road network into a graph holding at most `capacity` nodes.
    pub fn from_road_network_file_with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<BaseGraph, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut graph = BaseGraph::with_capacity(capacity)?;
        load_road_network(&mut graph, BufReader::new(file))?;
        Ok(graph)
    }

    pub fn from_road_network_str(contents: &str) -> Result<BaseGraph, LoadError> {
        let (node_count, _) = read_header(&mut ContentLines::new(contents.as_bytes()))?;

        let mut graph =
            BaseGraph::with_reserved_capacity(node_count.max(1), MAX_RESERVED_NODES)?;
        load_road_network(&mut graph, contents.as_bytes())?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = "\
# Campus road network
4 4

30.2680 77.9930 Main Gate
30.2700 77.9960 Central Library
# hostels
30.2730 77.9990 Boys Hostel
30.2690 78.0000 Cafeteria

0 1 0.5 Ring Road
1 2 0.6
2 3 0
0 3 -1
";

    #[test]
    fn loads_nodes_and_edges() {
        let graph = BaseGraph::from_road_network_str(CAMPUS).unwrap();

        assert_eq!(graph.capacity(), 4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 8);

        let library = graph.node(1).unwrap();
        assert_eq!(library.name(), "Central Library");
        assert_eq!(library.position().lat, 30.2700);
        assert_eq!(library.position().lng, 77.9960);
    }

    #[test]
    fn edges_are_bidirectional_and_keep_labels() {
        let graph = BaseGraph::from_road_network_str(CAMPUS).unwrap();

        let forward = graph
            .node_edges(0)
            .unwrap()
            .find(|edge| edge.end_node() == 1)
            .unwrap();
        let backward = graph
            .node_edges(1)
            .unwrap()
            .find(|edge| edge.end_node() == 0)
            .unwrap();

        assert_eq!(forward.weight(), 0.5);
        assert_eq!(backward.weight(), 0.5);
        assert_eq!(forward.label(), Some("Ring Road"));
    }

    #[test]
    fn missing_weights_fall_back_to_great_circle_distance() {
        let graph = BaseGraph::from_road_network_str(CAMPUS).unwrap();

        for (from, to) in [(2, 3), (0, 3)] {
            let edge = graph
                .node_edges(from)
                .unwrap()
                .find(|edge| edge.end_node() == to)
                .unwrap();
            let expected = graph
                .node_position(from)
                .unwrap()
                .haversine_distance(&graph.node_position(to).unwrap());

            assert!(expected > 0.0);
            assert_eq!(edge.weight(), expected);
        }
    }

    #[test]
    fn omitted_weight_column() {
        let graph = BaseGraph::from_road_network_str("2 1\n0 0 a\n0 1 b\n0 1\n").unwrap();

        let edge = graph.node_edges(0).unwrap().next().unwrap();
        assert!((edge.weight() - 111.194_926_6).abs() < 1e-6);
        assert_eq!(edge.label(), None);
    }

    #[test]
    fn node_without_name() {
        let graph = BaseGraph::from_road_network_str("1 0\n1.5 2.5\n").unwrap();
        assert_eq!(graph.node(0).unwrap().name(), "");
    }

    #[test]
    fn too_many_nodes_for_capacity() {
        let mut graph = BaseGraph::with_capacity(3).unwrap();

        let error = load_road_network(&mut graph, CAMPUS.as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            LoadError::TooManyNodes {
                declared: 4,
                available: 3
            }
        ));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn ids_are_relative_to_the_file() {
        let mut graph = BaseGraph::with_capacity(3).unwrap();
        graph.add_node(0.0, 0.0, "existing").unwrap();

        load_road_network(&mut graph, "2 1\n0 1 a\n0 2 b\n0 1 4\n".as_bytes()).unwrap();

        let edge = graph.node_edges(1).unwrap().next().unwrap();
        assert_eq!(edge.end_node(), 2);
        assert_eq!(graph.node_edges(0).unwrap().count(), 0);
    }

    #[test]
    fn edge_ids_past_the_file_are_rejected() {
        let mut graph = BaseGraph::with_capacity(3).unwrap();
        graph.add_node(0.0, 0.0, "existing").unwrap();

        let network = "2 1\n0 1 a\n0 2 b\n0 18446744073709551615 4\n";
        let error = load_road_network(&mut graph, network.as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            LoadError::Edge {
                line: 4,
                source: GraphError::InvalidNode(usize::MAX)
            }
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edge_to_a_node_outside_the_file() {
        let mut graph = BaseGraph::with_capacity(4).unwrap();
        graph.add_node(0.0, 0.0, "existing").unwrap();
        graph.add_node(0.0, 1.0, "existing").unwrap();

        // node 2 exists in the graph but the file only declares two nodes
        let error =
            load_road_network(&mut graph, "2 1\n0 1 a\n0 2 b\n0 2 4\n".as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            LoadError::Edge {
                line: 4,
                source: GraphError::InvalidNode(2)
            }
        ));
    }

    #[test]
    fn huge_header_fails_without_reserving_it() {
        let error = BaseGraph::from_road_network_str("1000000000000 0\n").unwrap_err();

        assert!(matches!(
            error,
            LoadError::UnexpectedEof {
                section: "node",
                expected: 1_000_000_000_000,
                found: 0
            }
        ));
    }

    #[test]
    fn missing_header() {
        let error = BaseGraph::from_road_network_str("# nothing here\n\n").unwrap_err();
        assert!(matches!(error, LoadError::MissingHeader));
    }

    #[test]
    fn truncated_file() {
        let error = BaseGraph::from_road_network_str("3 0\n0 0 a\n0 1 b\n").unwrap_err();
        assert!(matches!(
            error,
            LoadError::UnexpectedEof {
                section: "node",
                expected: 3,
                found: 2
            }
        ));

        let error = BaseGraph::from_road_network_str("2 2\n0 0 a\n0 1 b\n0 1 1\n").unwrap_err();
        assert!(matches!(
            error,
            LoadError::UnexpectedEof {
                section: "edge",
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn malformed_numbers_report_the_line() {
        let error = BaseGraph::from_road_network_str("2 0\n0 0 a\nnorth 1 b\n").unwrap_err();
        match error {
            LoadError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "invalid latitude 'north'");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn edge_to_unknown_node() {
        let error = BaseGraph::from_road_network_str("2 1\n0 0 a\n0 1 b\n0 5 1\n").unwrap_err();
        assert!(matches!(
            error,
            LoadError::Edge {
                line: 4,
                source: GraphError::InvalidNode(5)
            }
        ));
    }

    #[test]
    fn missing_file() {
        let error = BaseGraph::from_road_network_file("does/not/exist.txt").unwrap_err();
        assert!(matches!(error, LoadError::Open { .. }));
    }
}
