//! Dijkstra's algorithm with a lazily cleaned up binary heap.
//!
//! Instead of a decrease-key operation, an improved node is pushed again and
//! outdated queue entries are skipped when they are popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::AlgoError;
use crate::datastr::graph::{AdjacencyGraph, Distance, DistanceMap, Node, Weight};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DijkstraConfig {
    /// Reject graphs with negative arcs up front instead of silently computing wrong distances.
    pub validate_weights: bool,
}

/// Queue entry; ordered by key first so the heap yields the closest node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct State<N> {
    key: Weight,
    node: N,
}

/// Shortest distances from `start` to every node of `graph`.
///
/// All arc weights must be non-negative. This is not checked, negative arcs lead to wrong results.
/// Use [`shortest_paths_nonnegative_with`] and [`DijkstraConfig::validate_weights`] to check it.
pub fn shortest_paths_nonnegative<N: Node>(graph: &AdjacencyGraph<N>, start: N) -> Result<DistanceMap<N>, AlgoError> {
    shortest_paths_nonnegative_with(graph, start, DijkstraConfig::default())
}

pub fn shortest_paths_nonnegative_with<N: Node>(graph: &AdjacencyGraph<N>, start: N, config: DijkstraConfig) -> Result<DistanceMap<N>, AlgoError> {
    if !graph.contains_node(&start) {
        return Err(AlgoError::UnknownStartNode(format!("{:?}", start)));
    }

    if config.validate_weights {
        if let Some((from, link)) = graph.edges().find(|(_, link)| link.weight < 0) {
            return Err(AlgoError::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", link.node),
                weight: link.weight,
            });
        }
    }

    let mut distances = DistanceMap::unreached(graph.nodes());
    let mut queue = BinaryHeap::new();

    let mut num_queue_pops: usize = 0;
    let mut num_queue_pushs: usize = 1;
    let mut num_relaxed_arcs: usize = 0;

    distances.set(start.clone(), Distance::Reached(0));
    queue.push(Reverse(State { key: 0, node: start }));

    while let Some(Reverse(State { key, node })) = queue.pop() {
        num_queue_pops += 1;

        // stale entry, the node has been settled with a smaller key already
        if Distance::Reached(key) > distances.get(&node) {
            continue;
        }

        for link in graph.neighbors(&node) {
            num_relaxed_arcs += 1;
            let candidate = key
                .checked_add(link.weight)
                .ok_or_else(|| AlgoError::DistanceOverflow(format!("{:?}", link.node)))?;

            if Distance::Reached(candidate) < distances.get(&link.node) {
                distances.set(link.node.clone(), Distance::Reached(candidate));
                queue.push(Reverse(State {
                    key: candidate,
                    node: link.node.clone(),
                }));
                num_queue_pushs += 1;
            }
        }
    }

    if cfg!(feature = "detailed-stats") {
        report!("algo", "Dijkstra");
        report!("num_queue_pops", num_queue_pops);
        report!("num_queue_pushs", num_queue_pushs);
        report!("num_relaxed_arcs", num_relaxed_arcs);
    }

    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_distances_add_up() {
        let graph = AdjacencyGraph::from_edges(vec![("A", "B", 1), ("B", "C", 2)]);
        let distances = shortest_paths_nonnegative(&graph, "A").unwrap();

        assert_eq!(distances.len(), 3);
        assert_eq!(distances.get(&"A"), Distance::Reached(0));
        assert_eq!(distances.get(&"B"), Distance::Reached(1));
        assert_eq!(distances.get(&"C"), Distance::Reached(3));
    }

    #[test]
    fn prefers_longer_but_cheaper_paths() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1), (1, 4, 0)]);
        let distances = shortest_paths_nonnegative(&graph, 0).unwrap();

        assert_eq!(distances.get(&1), Distance::Reached(3));
        assert_eq!(distances.get(&4), Distance::Reached(3));
    }

    #[test]
    fn parallel_arcs_use_the_cheapest() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 7), (0, 1, 2), (0, 1, 5)]);
        let distances = shortest_paths_nonnegative(&graph, 0).unwrap();

        assert_eq!(distances.get(&1), Distance::Reached(2));
    }

    #[test]
    fn single_node_without_arcs() {
        let graph: AdjacencyGraph = AdjacencyGraph::with_nodes(vec![7], vec![]);
        let distances = shortest_paths_nonnegative(&graph, 7).unwrap();

        assert_eq!(distances.to_sorted_vec(), vec![(7, Distance::Reached(0))]);
    }

    #[test]
    fn isolated_node_is_unreached() {
        let graph = AdjacencyGraph::with_nodes(vec![9], vec![(0, 1, 1), (1, 0, 1)]);
        let distances = shortest_paths_nonnegative(&graph, 0).unwrap();

        assert!(distances.contains(&9));
        assert_eq!(distances.get(&9), Distance::Unreached);
        assert_eq!(distances.num_reached(), 2);
    }

    #[test]
    fn unknown_start_fails_fast() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 1)]);

        assert_eq!(shortest_paths_nonnegative(&graph, 5), Err(AlgoError::UnknownStartNode("5".to_string())));
    }

    #[test]
    fn distances_beyond_the_weight_range_fail() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, Weight::MAX), (1, 2, 1)]);

        assert_eq!(shortest_paths_nonnegative(&graph, 0), Err(AlgoError::DistanceOverflow("2".to_string())));
    }

    #[test]
    fn largest_weight_is_still_a_distance() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, Weight::MAX), (0, 2, 0)]);
        let distances = shortest_paths_nonnegative(&graph, 0).unwrap();

        assert_eq!(distances.get(&1), Distance::Reached(Weight::MAX));
        assert_eq!(distances.get(&2), Distance::Reached(0));
    }

    #[cfg(not(feature = "detailed-stats"))]
    #[test]
    fn search_counters_stay_out_of_the_report() {
        let guard = crate::report::enable_reporting("dijkstra_test");
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 1), (1, 2, 1)]);
        shortest_paths_nonnegative(&graph, 0).unwrap();

        let value = guard.finish();
        assert!(value.get("algo").is_none());
        assert!(value.get("num_queue_pops").is_none());
        assert!(value.get("num_relaxed_arcs").is_none());
    }

    #[test]
    fn negative_weights_only_rejected_when_validating() {
        let graph = AdjacencyGraph::from_edges(vec![(0, 1, 4), (0, 2, 5), (2, 1, -2)]);

        assert!(shortest_paths_nonnegative(&graph, 0).is_ok());
        assert_eq!(
            shortest_paths_nonnegative_with(&graph, 0, DijkstraConfig { validate_weights: true }),
            Err(AlgoError::NegativeWeight {
                from: "2".to_string(),
                to: "1".to_string(),
                weight: -2
            })
        );
    }
}
