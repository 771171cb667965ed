//! Comma-delimited node and edge file parsing.
//!
//! Node file: the first field on each line is an unsigned node id; any
//! further fields are ignored. Edge file: four fields per line - source id,
//! destination id, an ignored reserved field, and the edge weight; trailing
//! extras are ignored. Blank lines are skipped in both.
//!
//! Parsing is fail-fast: a non-numeric id, a missing field, or a negative or
//! out-of-range weight fails the whole load with the offending file and line
//! number instead of silently defaulting to zero.

use std::fs::File;
use std::io::{BufRead, BufReader};

use log::info;

use crate::graph::{DirectedGraph, NodeId};
use crate::{Error, Result};

/// Opens both input files and builds the graph from them.
pub fn read_graph(nodes_path: &str, edges_path: &str) -> Result<DirectedGraph<u32>> {
    let nodes = File::open(nodes_path).map_err(|source| Error::NodeFile {
        path: nodes_path.to_owned(),
        source,
    })?;
    let edges = File::open(edges_path).map_err(|source| Error::EdgeFile {
        path: edges_path.to_owned(),
        source,
    })?;

    let mut graph = DirectedGraph::new();
    load_nodes(&mut graph, BufReader::new(nodes), nodes_path)?;
    load_edges(&mut graph, BufReader::new(edges), edges_path)?;
    info!(
        "loaded {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads node records and inserts them into the graph.
pub fn load_nodes<R: BufRead>(
    graph: &mut DirectedGraph<u32>,
    reader: R,
    path: &str,
) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::NodeFile {
            path: path.to_owned(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let id = parse_id(line.split(',').next().unwrap_or(""), path, number + 1, "node id")?;
        graph.insert_node(id);
    }
    Ok(())
}

/// Reads edge records and inserts them into the graph, implicitly creating
/// any endpoint the node file never declared.
pub fn load_edges<R: BufRead>(
    graph: &mut DirectedGraph<u32>,
    reader: R,
    path: &str,
) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::EdgeFile {
            path: path.to_owned(),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let number = number + 1;
        let mut fields = line.split(',');

        let source_id = parse_id(field(&mut fields, path, number, "source id")?, path, number, "source id")?;
        let dest_id = parse_id(field(&mut fields, path, number, "destination id")?, path, number, "destination id")?;
        // Reserved field; present in the format but unused.
        field(&mut fields, path, number, "reserved field")?;
        let weight = parse_weight(field(&mut fields, path, number, "weight")?, path, number)?;

        graph.insert_edge(source_id, dest_id, weight);
    }
    Ok(())
}

fn field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    path: &str,
    line: usize,
    what: &str,
) -> Result<&'a str> {
    fields.next().ok_or_else(|| Error::MalformedRecord {
        path: path.to_owned(),
        line,
        reason: format!("missing {}", what),
    })
}

fn parse_id(field: &str, path: &str, line: usize, what: &str) -> Result<NodeId> {
    field.trim().parse().map_err(|_| Error::MalformedRecord {
        path: path.to_owned(),
        line,
        reason: format!("invalid {} '{}'", what, field.trim()),
    })
}

fn parse_weight(field: &str, path: &str, line: usize) -> Result<u32> {
    let raw: i64 = field.trim().parse().map_err(|_| Error::MalformedRecord {
        path: path.to_owned(),
        line,
        reason: format!("invalid weight '{}'", field.trim()),
    })?;
    u32::try_from(raw).map_err(|_| Error::MalformedRecord {
        path: path.to_owned(),
        line,
        reason: format!("weight {} out of range", raw),
    })
}
