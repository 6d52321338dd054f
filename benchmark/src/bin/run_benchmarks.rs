#[macro_use]
extern crate sssp_engine;

use std::env;
use std::error::Error;
use std::path::Path;

use benchmark::experiments::{default_experiments, run_experiments, BenchmarkSettings, RandomGraphSource, DEFAULT_SEED};
use benchmark::io::{load_experiments, store_results};
use benchmark::util::cli_args::{parse_arg_optional, parse_arg_required};
use benchmark::util::pin_to_first_core;
use sssp_engine::benchmark::DEFAULT_REPEATS;
use sssp_engine::report::enable_reporting;

/// Time Dijkstra and Bellman-Ford on a matrix of graphs and write the statistics as CSV.
///
/// Without an experiment file, sparse and dense random graphs of 100, 500 and 1000 nodes are used.
///
/// Additional parameters: <output_csv> <repeats = 10> <seed = 42> <experiments_json (optional)>
fn main() -> Result<(), Box<dyn Error>> {
    let (output, repeats, seed, experiments) = parse_args()?;
    let _reporter = enable_reporting("run_benchmarks");

    report!("repeats", repeats);
    report!("seed", seed);
    pin_to_first_core();

    let configs = match &experiments {
        Some(path) => load_experiments(Path::new(path))?,
        None => default_experiments(),
    };
    println!("Running {} experiments with {} repetitions each", configs.len(), repeats);

    let settings = BenchmarkSettings {
        repeats,
        ..Default::default()
    };
    let mut source = RandomGraphSource::new(seed);
    let results = run_experiments(&configs, &settings, &mut source)?;

    store_results(&results, Path::new(&output))?;
    println!("Wrote {} results to {}", results.len(), output);

    Ok(())
}

fn parse_args() -> Result<(String, usize, u64, Option<String>), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let output: String = parse_arg_required(&mut args, "Output File")?;
    let repeats = parse_arg_optional(&mut args, DEFAULT_REPEATS);
    let seed = parse_arg_optional(&mut args, DEFAULT_SEED);
    let experiments = args.next();

    if repeats == 0 {
        println!("Number of repetitions must be positive");
        return Err(Box::new(sssp_engine::cli::CliErr("Invalid argument!")));
    }

    Ok((output, repeats, seed, experiments))
}
