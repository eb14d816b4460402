pub mod base_graph;
pub mod constants;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod graph_edge;
pub mod location_index;
pub mod navigator;
pub mod priority_queue;
pub mod road_network;
pub mod routing;
pub mod stopwatch;
pub mod types;
