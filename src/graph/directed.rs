use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::Bounded;

use crate::graph::{NodeId, NodeIdx};

/// A directed edge out of a node, stored in its source's adjacency list.
#[derive(Debug, Clone, Copy)]
pub struct Edge<W> {
    /// Arena index of the destination node
    pub to: NodeIdx,

    /// Edge weight
    pub weight: W,
}

/// A graph vertex together with its mutable search state.
///
/// `distance`, `previous` and `heap_slot` belong to the currently running
/// (or most recently finished) shortest-path search; `W::max_value()` is the
/// "infinity" sentinel for an unreached node.
#[derive(Debug, Clone)]
pub struct Node<W> {
    id: NodeId,
    pub(crate) distance: W,
    pub(crate) previous: Option<NodeIdx>,
    pub(crate) heap_slot: Option<usize>,
    pub(crate) edges: Vec<Edge<W>>,
}

impl<W> Node<W>
where
    W: Copy + Ord + Bounded + Debug,
{
    fn new(id: NodeId) -> Self {
        Node {
            id,
            distance: W::max_value(),
            previous: None,
            heap_slot: None,
            edges: Vec::new(),
        }
    }

    /// The node's external identity
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Tentative (or, once extracted from the heap, final) distance from the
    /// search source; `W::max_value()` means unreached
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Predecessor on the current shortest-path tree
    pub fn previous(&self) -> Option<NodeIdx> {
        self.previous
    }

    /// Current position in the heap's backing array, if still enqueued
    pub fn heap_slot(&self) -> Option<usize> {
        self.heap_slot
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

/// A directed graph implementation using adjacency lists.
///
/// Nodes live in an arena indexed by [`NodeIdx`]; a side table maps external
/// [`NodeId`]s to arena slots in O(1) average time. Nodes are never removed,
/// so arena indices stay valid for the graph's lifetime.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W> {
    /// Node arena; a node's position here is its `NodeIdx`
    nodes: Vec<Node<W>>,

    /// External id -> arena slot
    index: HashMap<NodeId, NodeIdx>,
}

impl<W> DirectedGraph<W>
where
    W: Copy + Ord + Bounded + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Ensures a node with this id exists and returns its arena slot.
    ///
    /// Idempotent: inserting an id that is already present just returns the
    /// existing slot. New nodes start unreached (infinite distance, no
    /// predecessor, not enqueued).
    pub fn insert_node(&mut self, id: NodeId) -> NodeIdx {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node::new(id));
        self.index.insert(id, idx);
        idx
    }

    /// Appends a directed edge, implicitly creating either endpoint that was
    /// never declared as a node. Self-loops and duplicate edges are stored
    /// as-is, in insertion order.
    pub fn insert_edge(&mut self, source_id: NodeId, dest_id: NodeId, weight: W) {
        let from = self.insert_node(source_id);
        let to = self.insert_node(dest_id);
        self.nodes[from].edges.push(Edge { to, weight });
    }

    /// Looks up a node's arena slot by external id
    pub fn get(&self, id: NodeId) -> Option<NodeIdx> {
        self.index.get(&id).copied()
    }

    /// Returns the node at the given arena slot
    pub fn node(&self, idx: NodeIdx) -> &Node<W> {
        &self.nodes[idx]
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Returns true if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in arena order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<W>> {
        self.nodes.iter()
    }

    /// Puts every node back into its unreached state so a fresh search can
    /// run over the same graph.
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.distance = W::max_value();
            node.previous = None;
            node.heap_slot = None;
        }
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<W> {
        &mut self.nodes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_node_is_idempotent() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        let a = graph.insert_node(7);
        let b = graph.insert_node(7);
        assert_eq!(a, b);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn insert_edge_creates_missing_endpoints() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.insert_edge(1, 2, 10);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let one = graph.get(1).unwrap();
        let two = graph.get(2).unwrap();
        assert_eq!(graph.node(one).edges()[0].to, two);
        assert_eq!(graph.node(two).distance(), u32::MAX);
    }

    #[test]
    fn duplicate_and_self_loop_edges_are_kept() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        graph.insert_edge(1, 2, 5);
        graph.insert_edge(1, 2, 9);
        graph.insert_edge(1, 1, 3);
        let one = graph.get(1).unwrap();
        let weights: Vec<u32> = graph.node(one).edges().iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![5, 9, 3]);
    }
}
