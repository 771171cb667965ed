//! dotpath - Single-Pair Shortest Paths over Delimited Text Graphs
//!
//! This library computes the shortest path between two nodes of a directed,
//! weighted graph using Dijkstra's algorithm driven by a binary min-heap with
//! O(log n) decrease-key (every node tracks its own heap slot).
//!
//! Graphs are loaded from comma-delimited node and edge files and the
//! resulting path is rendered as a Graphviz `digraph` description.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::dijkstra::Dijkstra;
pub use data_structures::MinHeap;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{NodeId, NodeIdx};

/// Error types for the library
///
/// Display and Error are implemented by hand because the `NoPath` variant has
/// a field named `source` that is a plain `NodeId`; thiserror's derive would
/// unconditionally treat it as the error source and fail to compile.
#[derive(Debug)]
pub enum Error {
    NodeFile {
        path: String,
        source: std::io::Error,
    },

    EdgeFile {
        path: String,
        source: std::io::Error,
    },

    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    InvalidSource(NodeId),

    InvalidDestination(NodeId),

    NoPath { source: NodeId, target: NodeId },

    OutputFile {
        path: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NodeFile { path, source } => {
                write!(f, "cannot open nodes file {path}: {source}")
            }
            Error::EdgeFile { path, source } => {
                write!(f, "cannot open edges file {path}: {source}")
            }
            Error::MalformedRecord { path, line, reason } => {
                write!(f, "malformed record at {path}:{line}: {reason}")
            }
            Error::InvalidSource(id) => write!(f, "invalid source node id: {id}"),
            Error::InvalidDestination(id) => write!(f, "invalid destination node id: {id}"),
            Error::NoPath { source, target } => {
                write!(f, "no path exists between nodes {source} and {target}")
            }
            Error::OutputFile { path, source } => {
                write!(f, "cannot create output file {path}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NodeFile { source, .. }
            | Error::EdgeFile { source, .. }
            | Error::OutputFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
