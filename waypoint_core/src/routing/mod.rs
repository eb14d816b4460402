pub mod astar;
pub mod astar_heuristic;
pub mod dijkstra;
pub mod path_result;
pub(crate) mod routing_path_builder;
pub mod shortest_path_algorithm;
