use std::env;
use std::error::Error;
use std::path::Path;

use benchmark::experiments::DEFAULT_SEED;
use benchmark::util::cli_args::{parse_arg_optional, parse_arg_required};
use conversion::{generate_seeded_graph, store_graph, RandomGraphConfig};
use sssp_engine::datastr::graph::NodeId;

/// Generate a random graph and store it as `Source,Target,Weight` edge list.
///
/// With negative weights enabled, arcs may be negative but the graph never contains a negative cycle.
///
/// Additional parameters: <output_csv> <num_nodes> <num_edges> <negative_weights = false> <seed = 42>
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let output: String = parse_arg_required(&mut args, "Output File")?;
    let num_nodes: NodeId = parse_arg_required(&mut args, "number of nodes")?;
    let num_edges: usize = parse_arg_required(&mut args, "number of edges")?;
    let negative_weights = parse_arg_optional(&mut args, false);
    let seed = parse_arg_optional(&mut args, DEFAULT_SEED);

    let config = RandomGraphConfig::new(num_nodes, num_edges, negative_weights);
    config.check()?;

    let graph = generate_seeded_graph(&config, seed);
    store_graph(&graph, Path::new(&output))?;

    println!("Wrote graph with {} nodes and {} arcs to {}", graph.num_nodes(), graph.num_arcs(), output);
    Ok(())
}
