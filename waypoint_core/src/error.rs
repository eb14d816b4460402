use std::path::PathBuf;

use thiserror::Error;

use crate::types::{NodeId, Weight};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("graph capacity must be greater than zero, got {0}")]
    InvalidCapacity(i64),
    #[error("failed to allocate storage for {capacity} nodes")]
    AllocationFailed { capacity: usize },
    #[error("graph is full ({capacity} nodes)")]
    CapacityExceeded { capacity: usize },
    #[error("node {0} does not exist")]
    InvalidNode(NodeId),
    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(Weight),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("start node {0} does not exist")]
    InvalidStart(NodeId),
    #[error("end node {0} does not exist")]
    InvalidEnd(NodeId),
    #[error("no node found near {lat}, {lng}")]
    NoNearbyNode { lat: f64, lng: f64 },
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open road network {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read road network")]
    Io(#[from] std::io::Error),
    #[error("road network is missing the '<nodes> <edges>' header")]
    MissingHeader,
    #[error("road network declares {declared} nodes but only {available} more fit in the graph")]
    TooManyNodes { declared: usize, available: usize },
    #[error("unexpected end of file: expected {expected} {section} lines, found {found}")]
    UnexpectedEof {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: {source}")]
    Edge {
        line: usize,
        #[source]
        source: GraphError,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}
