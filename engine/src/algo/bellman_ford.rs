//! Bellman-Ford: repeated relaxation of all arcs, works with negative weights.

use super::AlgoError;
use crate::datastr::graph::{AdjacencyGraph, Distance, DistanceMap, Link, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BellmanFordConfig {
    /// Run one additional pass and fail with [`AlgoError::NegativeCycle`] if it still improves a distance.
    pub detect_negative_cycles: bool,
    /// Stop as soon as a pass does not change anything. Does not change the result.
    pub early_termination: bool,
}

/// Shortest distances from `start` to every node in `all_nodes`.
///
/// Performs exactly `|all_nodes| - 1` passes over all arcs of `graph`.
/// Negative cycles are not reported, see [`BellmanFordConfig::detect_negative_cycles`].
pub fn shortest_paths_general<N: Node>(graph: &AdjacencyGraph<N>, all_nodes: &[N], start: N) -> Result<DistanceMap<N>, AlgoError> {
    shortest_paths_general_with(graph, all_nodes, start, BellmanFordConfig::default())
}

pub fn shortest_paths_general_with<N: Node>(
    graph: &AdjacencyGraph<N>,
    all_nodes: &[N],
    start: N,
    config: BellmanFordConfig,
) -> Result<DistanceMap<N>, AlgoError> {
    let mut distances = DistanceMap::unreached(all_nodes);

    if !distances.contains(&start) {
        return Err(AlgoError::UnknownStartNode(format!("{:?}", start)));
    }

    for (from, link) in graph.edges() {
        if !distances.contains(from) {
            return Err(AlgoError::UnknownNode(format!("{:?}", from)));
        }
        if !distances.contains(&link.node) {
            return Err(AlgoError::UnknownNode(format!("{:?}", link.node)));
        }
    }

    distances.set(start, Distance::Reached(0));

    let max_passes = distances.len().saturating_sub(1);
    let mut num_passes: usize = 0;
    let mut num_relaxed_arcs: usize = 0;

    for _ in 0..max_passes {
        let updated = relax_all(graph, &mut distances, &mut num_relaxed_arcs)?;
        num_passes += 1;

        if config.early_termination && !updated {
            break;
        }
    }

    if cfg!(feature = "detailed-stats") {
        report!("algo", "Bellman-Ford");
        report!("num_passes", num_passes);
        report!("num_relaxed_arcs", num_relaxed_arcs);
    }

    if config.detect_negative_cycles {
        for (from, link) in graph.edges() {
            if linked(&distances, from, link)? < distances.get(&link.node) {
                return Err(AlgoError::NegativeCycle);
            }
        }
    }

    Ok(distances)
}

fn linked<N: Node>(distances: &DistanceMap<N>, from: &N, link: &Link<N>) -> Result<Distance, AlgoError> {
    distances
        .get(from)
        .link(link.weight)
        .ok_or_else(|| AlgoError::DistanceOverflow(format!("{:?}", link.node)))
}

/// One pass over all arcs. Returns whether any distance improved.
fn relax_all<N: Node>(graph: &AdjacencyGraph<N>, distances: &mut DistanceMap<N>, num_relaxed_arcs: &mut usize) -> Result<bool, AlgoError> {
    let mut updated = false;

    for (from, link) in graph.edges() {
        *num_relaxed_arcs += 1;
        let candidate = linked(distances, from, link)?;

        if candidate < distances.get(&link.node) {
            distances.set(link.node.clone(), candidate);
            updated = true;
        }
    }

    Ok(updated)
}
