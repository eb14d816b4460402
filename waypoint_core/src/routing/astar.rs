use tracing::debug;

use super::astar_heuristic::{AStarHeuristic, HaversineHeuristic};
use super::path_result::PathResult;
use super::routing_path_builder::build_node_path;
use super::shortest_path_algorithm::ShortestPathAlgorithm;
use crate::constants::INVALID_NODE;
use crate::error::RoutingError;
use crate::graph::Graph;
use crate::priority_queue::PriorityQueue;
use crate::stopwatch::Stopwatch;
use crate::types::{NodeId, Weight};

// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Init,
    Running,
    Found,
    Exhausted,
}

#[derive(Debug, Default)]
struct SearchStats {
    iterations: usize,
    relaxations: usize,
    stale_entries: usize,
}

/// Per-search arrays, indexed by node id and sized to the graph.
struct SearchSpace {
    /// g_score: cheapest known weight from the start
    weights: Vec<Weight>,

    /// f_score = g_score + h_score, the priority the node was last queued with
    estimates: Vec<Weight>,

    parents: Vec<NodeId>,

    heap: PriorityQueue,
}

impl SearchSpace {
    fn new(node_count: usize) -> Self {
        SearchSpace {
            weights: vec![Weight::INFINITY; node_count],
            estimates: vec![Weight::INFINITY; node_count],
            parents: vec![INVALID_NODE; node_count],
            heap: PriorityQueue::with_capacity(1024),
        }
    }

    fn update_node_data(&mut self, node: NodeId, weight: Weight, estimate: Weight, parent: NodeId) {
        self.weights[node] = weight;
        self.estimates[node] = estimate;
        self.parents[node] = parent;
        self.heap.push(node, estimate);
    }
}

pub struct AStar<H: AStarHeuristic> {
    name: &'static str,
    heuristic: H,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(name: &'static str, heuristic: H) -> AStar<H> {
        AStar { name, heuristic }
    }
}

impl AStar<HaversineHeuristic> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> AStar<HaversineHeuristic> {
        Self::with_heuristic("astar", HaversineHeuristic)
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &self,
        graph: &impl Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<PathResult, RoutingError> {
        if !graph.is_valid_node(start) {
            return Err(RoutingError::InvalidStart(start));
        }

        if !graph.is_valid_node(end) {
            return Err(RoutingError::InvalidEnd(end));
        }

        let stopwatch = Stopwatch::new(self.name);
        let mut state = SearchState::Init;
        let mut stats = SearchStats::default();

        let mut search = SearchSpace::new(graph.node_count());
        let h_score = self.heuristic.estimate(graph, start, end);
        search.update_node_data(start, 0.0, h_score, INVALID_NODE);

        state = transition(state, SearchState::Running);

        while let Some((node_id, f_score)) = search.heap.pop() {
            stats.iterations += 1;

            if node_id == end {
                state = transition(state, SearchState::Found);
                break;
            }

            // The node was queued again with a better score since this entry was pushed
            if f_score > search.estimates[node_id] {
                stats.stale_entries += 1;
                continue;
            }

            let g_score = search.weights[node_id];
            let Some(edges) = graph.node_edges(node_id) else {
                continue;
            };

            for edge in edges {
                let adj_node = edge.end_node();
                let Some(&current_weight) = search.weights.get(adj_node) else {
                    continue;
                };

                let next_weight = g_score + edge.weight();

                if next_weight < current_weight {
                    let h_score = self.heuristic.estimate(graph, adj_node, end);
                    search.update_node_data(adj_node, next_weight, next_weight + h_score, node_id);
                    stats.relaxations += 1;
                }
            }
        }

        if state != SearchState::Found {
            state = transition(state, SearchState::Exhausted);
        }

        debug!(
            algorithm = self.name,
            start,
            end,
            ?state,
            iterations = stats.iterations,
            relaxations = stats.relaxations,
            stale_entries = stats.stale_entries,
            "search finished"
        );
        stopwatch.report();

        if state == SearchState::Exhausted {
            return Ok(PathResult::not_found());
        }

        Ok(build_node_path(&search.parents, start, end)
            .map(|nodes| PathResult::new(nodes, search.weights[end]))
            .unwrap_or_else(PathResult::not_found))
    }
}

fn transition(from: SearchState, to: SearchState) -> SearchState {
    debug_assert!(matches!(
        (from, to),
        (SearchState::Init, SearchState::Running)
            | (SearchState::Running, SearchState::Found)
            | (SearchState::Running, SearchState::Exhausted)
    ));
    to
}
