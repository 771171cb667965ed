pub mod directed;

pub use directed::{DirectedGraph, Edge, Node};

/// External node identity, as read from the input files.
pub type NodeId = u32;

/// A node's stable slot in the graph's arena. All internal references
/// (predecessors, edge destinations, heap slots) use arena indices rather
/// than ids or pointers.
pub type NodeIdx = usize;
