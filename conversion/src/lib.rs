//! Getting graphs into and out of the solvers: CSV edge lists and random generation.

use std::error::Error;
use std::fmt;
use std::io;

pub mod csv_graph;
pub mod random;

pub use csv_graph::{load_graph, read_graph, store_graph, write_graph};
pub use random::{generate_random_graph, generate_seeded_graph, RandomGraphConfig};

#[derive(Debug)]
pub enum ConversionError {
    Io(io::Error),
    Csv(csv::Error),
    /// A row (or the header, line 1) that does not describe a valid `Source,Target,Weight` triple.
    Malformed { line: u64, message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::Io(err) => write!(f, "I/O error: {}", err),
            ConversionError::Csv(err) => write!(f, "CSV error: {}", err),
            ConversionError::Malformed { line, message } => write!(f, "malformed input in line {}: {}", line, message),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConversionError::Io(err) => Some(err),
            ConversionError::Csv(err) => Some(err),
            ConversionError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for ConversionError {
    fn from(err: io::Error) -> Self {
        ConversionError::Io(err)
    }
}

impl From<csv::Error> for ConversionError {
    fn from(err: csv::Error) -> Self {
        let line = match err.kind() {
            csv::ErrorKind::Io(_) => None,
            _ => err.position().map(|position| position.line()),
        };

        match line {
            Some(line) => ConversionError::Malformed { line, message: err.to_string() },
            None => ConversionError::Csv(err),
        }
    }
}
