use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sssp_engine::benchmark::TimingStatistics;
use sssp_engine::cli::CliErr;
use sssp_engine::datastr::graph::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Dijkstra,
    #[serde(rename = "Bellman-Ford")]
    BellmanFord,
}

impl Algorithm {
    pub fn report_key(&self) -> String {
        match self {
            Algorithm::Dijkstra => "dijkstra".to_string(),
            Algorithm::BellmanFord => "bellman_ford".to_string(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
            Algorithm::BellmanFord => write!(f, "Bellman-Ford"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = CliErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DIJKSTRA" => Ok(Algorithm::Dijkstra),
            "BELLMAN_FORD" | "BELLMAN-FORD" => Ok(Algorithm::BellmanFord),
            _ => Err(CliErr("Unknown algorithm [DIJKSTRA/BELLMAN_FORD]")),
        }
    }
}

/// One graph of the benchmark matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub label: String,
    pub num_nodes: NodeId,
    pub num_edges: usize,
    /// Whether the graph may contain negative arcs. Dijkstra is only run on graphs without.
    #[serde(default)]
    pub negative_weights: bool,
    /// Start node of all queries; the smallest node id if missing.
    #[serde(default)]
    pub start: Option<NodeId>,
    /// Load the graph from this edge list instead of generating it.
    #[serde(default)]
    pub csv: Option<PathBuf>,
}

impl ExperimentConfig {
    pub fn random(label: &str, num_nodes: NodeId, num_edges: usize, negative_weights: bool) -> Self {
        Self {
            label: label.to_string(),
            num_nodes,
            num_edges,
            negative_weights,
            start: None,
            csv: None,
        }
    }
}

/// One line of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Graph")]
    pub graph: String,
    #[serde(rename = "Algorithm")]
    pub algorithm: Algorithm,
    #[serde(rename = "Min")]
    pub min: f64,
    #[serde(rename = "Max")]
    pub max: f64,
    #[serde(rename = "Avg")]
    pub avg: f64,
    #[serde(rename = "Std")]
    pub std: f64,
}

impl ResultRow {
    pub fn new(graph: String, algorithm: Algorithm, statistics: &TimingStatistics) -> Self {
        Self {
            graph,
            algorithm,
            min: statistics.min,
            max: statistics.max,
            avg: statistics.mean,
            std: statistics.std,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("Bellman_Ford".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert_eq!("bellman-ford".parse::<Algorithm>(), Ok(Algorithm::BellmanFord));
        assert!("floyd".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::BellmanFord.to_string(), "Bellman-Ford");
    }

    #[test]
    fn config_defaults_from_json() {
        let config: ExperimentConfig = serde_json::from_str(r#"{ "label": "tiny", "num_nodes": 3, "num_edges": 2 }"#).unwrap();

        assert_eq!(config, ExperimentConfig::random("tiny", 3, 2, false));
    }
}
