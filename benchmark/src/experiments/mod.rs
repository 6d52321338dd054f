//! The benchmark sweep: every configured graph against both solvers.

use std::error::Error;

use sssp_engine::algo::{shortest_paths_general_with, shortest_paths_nonnegative_with, BellmanFordConfig, DijkstraConfig};
use sssp_engine::benchmark::{measure, TimingStatistics, DEFAULT_REPEATS};
use sssp_engine::cli::CliErr;
use sssp_engine::datastr::graph::{AdjacencyGraph, NodeId};
use sssp_engine::report::{push_collection_context, push_context, report_time_with_key};

pub mod graph_source;
pub mod types;

pub use graph_source::{GraphSource, RandomGraphSource};
pub use types::{Algorithm, ExperimentConfig, ResultRow};

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSettings {
    pub repeats: usize,
    pub dijkstra: DijkstraConfig,
    pub bellman_ford: BellmanFordConfig,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            dijkstra: DijkstraConfig::default(),
            bellman_ford: BellmanFordConfig::default(),
        }
    }
}

/// Sparse and dense random graphs of three sizes, each with and without negative arcs.
pub fn default_experiments() -> Vec<ExperimentConfig> {
    let mut configs = Vec::new();

    for &num_nodes in &[100, 500, 1000] {
        for &(density, avg_degree) in &[("sparse", 3), ("dense", 20)] {
            for &negative_weights in &[false, true] {
                let label = format!("random-{}-{}{}", num_nodes, density, if negative_weights { "-negative" } else { "" });
                configs.push(ExperimentConfig::random(&label, num_nodes, num_nodes as usize * avg_degree, negative_weights));
            }
        }
    }

    configs
}

/// Dijkstra is skipped whenever negative arcs are possible, Bellman-Ford always runs.
pub fn algorithms_for(config: &ExperimentConfig, graph: &AdjacencyGraph) -> Vec<Algorithm> {
    if config.negative_weights || graph.has_negative_weights() {
        vec![Algorithm::BellmanFord]
    } else {
        vec![Algorithm::Dijkstra, Algorithm::BellmanFord]
    }
}

/// Run the whole benchmark matrix, one result row per graph and algorithm.
pub fn run_experiments(configs: &[ExperimentConfig], settings: &BenchmarkSettings, source: &mut impl GraphSource) -> Result<Vec<ResultRow>, Box<dyn Error>> {
    let mut results = Vec::with_capacity(configs.len() * 2);
    let mut experiments_ctxt = push_collection_context("experiments".to_string());

    for config in configs {
        let _experiment_ctxt = experiments_ctxt.push_collection_item();
        report!("label", config.label.clone());

        let graph = report_time_with_key(&format!("Preparing graph {}", config.label), "graph_preparation_ms", || source.graph(config))?;
        report!("graph", { "num_nodes": graph.num_nodes(), "num_arcs": graph.num_arcs() });

        let start = match config.start {
            Some(start) => start,
            None => graph.nodes().min().copied().ok_or(CliErr("Graph must not be empty!"))?,
        };
        report!("start", start);

        let algorithms = algorithms_for(config, &graph);
        if !config.negative_weights && !algorithms.contains(&Algorithm::Dijkstra) {
            println!("{}: graph contains negative arcs, skipping Dijkstra", config.label);
        }

        for algorithm in algorithms {
            let _algo_ctxt = push_context(algorithm.report_key());
            let statistics = run_algorithm(algorithm, &graph, start, settings)?;

            println!(
                "{} - {}: min {:.3} ms, max {:.3} ms, avg {:.3} ms, std {:.3} ms",
                config.label, algorithm, statistics.min, statistics.max, statistics.mean, statistics.std
            );
            results.push(ResultRow::new(config.label.clone(), algorithm, &statistics));
        }
    }

    Ok(results)
}

/// Time `algorithm` on `graph`. A first, untimed run surfaces invalid input before measuring.
pub fn run_algorithm(algorithm: Algorithm, graph: &AdjacencyGraph, start: NodeId, settings: &BenchmarkSettings) -> Result<TimingStatistics, Box<dyn Error>> {
    match algorithm {
        Algorithm::Dijkstra => {
            let solve = || shortest_paths_nonnegative_with(graph, start, settings.dijkstra);
            let distances = solve()?;
            report!("num_reached", distances.num_reached());

            Ok(measure(solve, settings.repeats))
        }
        Algorithm::BellmanFord => {
            let nodes = graph.sorted_nodes();
            let solve = || shortest_paths_general_with(graph, &nodes, start, settings.bellman_ford);
            let distances = solve()?;
            report!("num_reached", distances.num_reached());

            Ok(measure(solve, settings.repeats))
        }
    }
}
