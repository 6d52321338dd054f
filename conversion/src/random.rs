//! Random graphs for benchmarking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sssp_engine::cli::CliErr;
use sssp_engine::datastr::graph::{AdjacencyGraph, NodeId, Weight};

pub const DEFAULT_MAX_WEIGHT: Weight = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    pub num_nodes: NodeId,
    pub num_edges: usize,
    /// Upper bound of the (base) arc costs, which are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    pub negative_weights: bool,
}

impl RandomGraphConfig {
    pub fn new(num_nodes: NodeId, num_edges: usize, negative_weights: bool) -> Self {
        Self {
            num_nodes,
            num_edges,
            max_weight: DEFAULT_MAX_WEIGHT,
            negative_weights,
        }
    }

    /// Reject configurations [`generate_random_graph`] cannot satisfy.
    pub fn check(&self) -> Result<(), CliErr> {
        if self.max_weight <= 0 {
            return Err(CliErr("Maximum weight must be positive!"));
        }
        if self.num_nodes < 2 && self.num_edges > 0 {
            return Err(CliErr("Arcs require at least two nodes!"));
        }
        Ok(())
    }
}

/// Draw `num_edges` arcs between uniformly chosen, distinct nodes. All nodes `0..num_nodes` are part of the graph.
///
/// With `negative_weights`, every node gets a random potential `p` and an arc `(u, v)` with cost `c`
/// gets the weight `c + p(u) - p(v)`. The potentials cancel out along every cycle, so each cycle keeps
/// its positive cost while single arcs may become negative.
pub fn generate_random_graph<R: Rng>(config: &RandomGraphConfig, rng: &mut R) -> AdjacencyGraph {
    let num_nodes = config.num_nodes;
    assert!(config.max_weight > 0, "Maximum weight must be positive!");
    assert!(num_nodes > 1 || config.num_edges == 0, "Arcs require at least two nodes!");

    let potentials = if config.negative_weights {
        (0..num_nodes).map(|_| rng.gen_range(0..=config.max_weight)).collect::<Vec<Weight>>()
    } else {
        vec![0; num_nodes as usize]
    };

    let edges = (0..config.num_edges)
        .map(|_| {
            let (mut from, mut to) = (0, 0);
            while from == to {
                from = rng.gen_range(0..num_nodes);
                to = rng.gen_range(0..num_nodes);
            }
            let cost = rng.gen_range(1..=config.max_weight);
            (from, to, cost + potentials[from as usize] - potentials[to as usize])
        })
        .collect::<Vec<(NodeId, NodeId, Weight)>>();

    AdjacencyGraph::with_nodes(0..num_nodes, edges)
}

/// Reproducible variant of [`generate_random_graph`].
pub fn generate_seeded_graph(config: &RandomGraphConfig, seed: u64) -> AdjacencyGraph {
    generate_random_graph(config, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sssp_engine::algo::{shortest_paths_general_with, BellmanFordConfig};

    #[test]
    fn generates_requested_size_without_self_loops() {
        let graph = generate_seeded_graph(&RandomGraphConfig::new(50, 400, false), 1);

        assert_eq!(graph.num_nodes(), 50);
        assert_eq!(graph.num_arcs(), 400);
        assert!(graph.edges().all(|(&from, link)| from != link.node));
        assert!(graph.edges().all(|(_, link)| (1..=DEFAULT_MAX_WEIGHT).contains(&link.weight)));
    }

    #[test]
    fn nodes_without_arcs_are_kept() {
        let graph = generate_seeded_graph(&RandomGraphConfig::new(10, 0, false), 1);

        assert_eq!(graph.num_nodes(), 10);
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    fn arcs_without_enough_nodes_are_rejected() {
        assert_eq!(RandomGraphConfig::new(1, 5, false).check(), Err(CliErr("Arcs require at least two nodes!")));
        assert!(RandomGraphConfig::new(0, 1, true).check().is_err());
        assert!(RandomGraphConfig::new(1, 0, false).check().is_ok());
        assert!(RandomGraphConfig::new(2, 5, false).check().is_ok());

        let mut config = RandomGraphConfig::new(10, 10, false);
        config.max_weight = 0;
        assert!(config.check().is_err());
    }

    #[test]
    fn same_seed_same_graph() {
        let config = RandomGraphConfig::new(30, 90, true);

        assert_eq!(generate_seeded_graph(&config, 3), generate_seeded_graph(&config, 3));
    }

    #[test]
    fn negative_weights_without_negative_cycles() {
        let config = RandomGraphConfig::new(60, 600, true);
        let graph = generate_seeded_graph(&config, 11);
        assert!(graph.has_negative_weights());

        let check = BellmanFordConfig {
            detect_negative_cycles: true,
            early_termination: true,
        };
        for start in [0, 17, 59] {
            assert!(shortest_paths_general_with(&graph, &graph.sorted_nodes(), start, check).is_ok());
        }
    }
}
