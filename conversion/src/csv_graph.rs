//! Edge lists as CSV with the header `Source,Target,Weight`.
//!
//! Node ids are non-negative integers, weights are (possibly negative) integers.
//! Nodes without any arc cannot be expressed in this format.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sssp_engine::datastr::graph::{AdjacencyGraph, NodeId, Weight};

use crate::ConversionError;

const COLUMNS: [&str; 3] = ["Source", "Target", "Weight"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct EdgeRecord {
    #[serde(rename = "Source")]
    source: NodeId,
    #[serde(rename = "Target")]
    target: NodeId,
    #[serde(rename = "Weight")]
    weight: Weight,
}

/// Parse an edge list. Fails on the first row that is not a valid triple.
pub fn read_graph<R: Read>(reader: R) -> Result<AdjacencyGraph, ConversionError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(missing) = COLUMNS.iter().find(|&&column| !headers.iter().any(|header| header == column)) {
        return Err(ConversionError::Malformed {
            line: 1,
            message: format!("missing column `{}`", missing),
        });
    }

    let edges = csv_reader
        .deserialize::<EdgeRecord>()
        .map(|record| record.map(|edge| (edge.source, edge.target, edge.weight)))
        .collect::<Result<Vec<(NodeId, NodeId, Weight)>, csv::Error>>()?;

    Ok(AdjacencyGraph::from_edges(edges))
}

pub fn load_graph(path: &Path) -> Result<AdjacencyGraph, ConversionError> {
    read_graph(File::open(path)?)
}

/// Write all arcs, sorted by tail node. The order of parallel arcs is kept.
pub fn write_graph<W: Write>(graph: &AdjacencyGraph, writer: W) -> Result<(), ConversionError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // an empty graph still gets its header
    if graph.num_arcs() == 0 {
        csv_writer.write_record(COLUMNS)?;
    }

    for source in graph.sorted_nodes() {
        for link in graph.neighbors(&source) {
            csv_writer.serialize(EdgeRecord {
                source,
                target: link.node,
                weight: link.weight,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn store_graph(graph: &AdjacencyGraph, path: &Path) -> Result<(), ConversionError> {
    write_graph(graph, File::create(path)?)
}
