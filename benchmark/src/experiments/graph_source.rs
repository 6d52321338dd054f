use std::error::Error;

use conversion::{generate_seeded_graph, load_graph, RandomGraphConfig};
use sssp_engine::datastr::graph::AdjacencyGraph;

use crate::experiments::types::ExperimentConfig;

/// Provides the graph for an experiment.
pub trait GraphSource {
    fn graph(&mut self, config: &ExperimentConfig) -> Result<AdjacencyGraph, Box<dyn Error>>;
}

/// Loads the configured edge list if there is one, generates a random graph otherwise.
///
/// The n-th generated graph uses the seed `seed + n`, so a sweep is reproducible as a whole.
#[derive(Debug, Clone)]
pub struct RandomGraphSource {
    seed: u64,
    num_generated: u64,
}

impl RandomGraphSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, num_generated: 0 }
    }
}

impl GraphSource for RandomGraphSource {
    fn graph(&mut self, config: &ExperimentConfig) -> Result<AdjacencyGraph, Box<dyn Error>> {
        if let Some(path) = &config.csv {
            return Ok(load_graph(path)?);
        }

        let random_config = RandomGraphConfig::new(config.num_nodes, config.num_edges, config.negative_weights);
        random_config.check()?;

        let seed = self.seed.wrapping_add(self.num_generated);
        self.num_generated += 1;
        report!("graph_seed", seed);

        Ok(generate_seeded_graph(&random_config, seed))
    }
}
