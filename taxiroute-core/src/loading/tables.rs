//! CSV tables of the taxiway network

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, NodeId, TaxiwayGraph};

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    u: NodeId,
    v: NodeId,
    length: f64,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    osmid: NodeId,
    readable_label: String,
}

fn open(path: &Path, kind: &str) -> Result<File, Error> {
    File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open {kind} file '{}': {}", path.display(), e),
        ))
    })
}

/// Adds every `u,v,length` row of `reader` to the graph.
///
/// Returns the number of rows read.
///
/// # Errors
///
/// Returns an error on the first malformed row or invalid length
pub fn read_edges<R: Read>(reader: R, graph: &mut TaxiwayGraph) -> Result<usize, Error> {
    let mut rows = 0;
    for record in csv::Reader::from_reader(reader).deserialize::<EdgeRecord>() {
        let edge = record?;
        graph.add_edge(edge.u, edge.v, edge.length)?;
        rows += 1;
    }
    Ok(rows)
}

/// Adds every `osmid,readable_label` row of `reader` to the label lookup.
///
/// # Errors
///
/// Returns an error on the first malformed row
pub fn read_labels<R: Read>(reader: R, graph: &mut TaxiwayGraph) -> Result<usize, Error> {
    let mut rows = 0;
    for record in csv::Reader::from_reader(reader).deserialize::<LabelRecord>() {
        let label = record?;
        graph.set_label(label.osmid, label.readable_label);
        rows += 1;
    }
    Ok(rows)
}

/// Builds a graph from an edges file and an optional labels file
///
/// # Errors
///
/// Returns an error if a file cannot be opened or contains a malformed row
pub fn load_graph(edges_path: &Path, labels_path: Option<&Path>) -> Result<TaxiwayGraph, Error> {
    let mut graph = TaxiwayGraph::new();
    let edge_rows = read_edges(open(edges_path, "edges")?, &mut graph)?;
    log::debug!("Read {edge_rows} edge rows from {}", edges_path.display());

    if let Some(labels_path) = labels_path {
        let label_rows = read_labels(open(labels_path, "labels")?, &mut graph)?;
        log::debug!("Read {label_rows} label rows from {}", labels_path.display());
    }

    Ok(graph)
}
