use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::experiments::{ExperimentConfig, ResultRow};

/// Write the result table as CSV with the header `Graph,Algorithm,Min,Max,Avg,Std`.
pub fn write_results<W: Write>(results: &[ResultRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if results.is_empty() {
        csv_writer.write_record(["Graph", "Algorithm", "Min", "Max", "Avg", "Std"])?;
    }
    for row in results {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn store_results(results: &[ResultRow], path: &Path) -> Result<(), Box<dyn Error>> {
    write_results(results, File::create(path)?)?;
    Ok(())
}

/// Read a JSON array of experiment configurations.
pub fn load_experiments(path: &Path) -> Result<Vec<ExperimentConfig>, Box<dyn Error>> {
    let configs: Vec<ExperimentConfig> = serde_json::from_reader(File::open(path)?)?;
    Ok(configs)
}
