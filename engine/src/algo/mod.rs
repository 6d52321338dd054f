use std::error::Error;
use std::fmt;

use crate::datastr::graph::Weight;

pub mod bellman_ford;
pub mod dijkstra;

pub use bellman_ford::{shortest_paths_general, shortest_paths_general_with, BellmanFordConfig};
pub use dijkstra::{shortest_paths_nonnegative, shortest_paths_nonnegative_with, DijkstraConfig};

/// Input contract violations detected by the solvers.
///
/// Node ids are kept in their `Debug` representation so the error does not depend on the node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// The start node is not part of the node set.
    UnknownStartNode(String),
    /// An arc endpoint is missing from the declared node set.
    UnknownNode(String),
    /// Dijkstra was asked to validate its input and found a negative arc.
    NegativeWeight { from: String, to: String, weight: Weight },
    /// Bellman-Ford was asked to detect negative cycles and found one reachable from the start.
    NegativeCycle,
    /// A tentative distance to the node left the range of `Weight`.
    DistanceOverflow(String),
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AlgoError::UnknownStartNode(node) => write!(f, "start node {} is not part of the graph", node),
            AlgoError::UnknownNode(node) => write!(f, "node {} is referenced by an arc but was not declared", node),
            AlgoError::NegativeWeight { from, to, weight } => {
                write!(f, "arc {} -> {} has negative weight {}, which Dijkstra does not support", from, to, weight)
            }
            AlgoError::NegativeCycle => write!(f, "graph contains a negative cycle reachable from the start node"),
            AlgoError::DistanceOverflow(node) => write!(f, "distance to node {} exceeds the weight range", node),
        }
    }
}

impl Error for AlgoError {}
