#[macro_use]
extern crate sssp_engine;

use std::env;
use std::error::Error;
use std::path::Path;

use benchmark::experiments::Algorithm;
use benchmark::util::cli_args::{parse_arg_optional, parse_arg_required};
use conversion::load_graph;
use sssp_engine::algo::{shortest_paths_general, shortest_paths_nonnegative_with, DijkstraConfig};
use sssp_engine::datastr::graph::NodeId;
use sssp_engine::report::{enable_reporting, report_time};

/// Compute all distances from a start node and print them as `node,distance`, unreachable nodes as `inf`.
///
/// Dijkstra refuses graphs with negative arcs, use Bellman-Ford for those.
///
/// Additional parameters: <graph_csv> <start> <algorithm = DIJKSTRA>
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let graph_file: String = parse_arg_required(&mut args, "Graph File")?;
    let start: NodeId = parse_arg_required(&mut args, "start node")?;
    let algorithm = parse_arg_optional(&mut args, Algorithm::Dijkstra);

    let _reporter = enable_reporting("shortest_paths");
    report!("algorithm", algorithm.to_string());

    let graph = report_time("Loading graph", || load_graph(Path::new(&graph_file)))?;
    report!("graph", { "num_nodes": graph.num_nodes(), "num_arcs": graph.num_arcs() });

    let distances = report_time("Shortest path computation", || match algorithm {
        Algorithm::Dijkstra => shortest_paths_nonnegative_with(&graph, start, DijkstraConfig { validate_weights: true }),
        Algorithm::BellmanFord => shortest_paths_general(&graph, &graph.sorted_nodes(), start),
    })?;

    println!("node,distance");
    for (node, distance) in distances.to_sorted_vec() {
        println!("{},{}", node, distance);
    }

    Ok(())
}
