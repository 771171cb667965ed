use std::fmt::Debug;

use num_traits::Bounded;

use crate::graph::{DirectedGraph, NodeIdx};

/// An array-backed binary min-heap over graph nodes, keyed by tentative
/// distance, with O(log n) decrease-key.
///
/// The heap stores arena indices; each node mirrors its current position in
/// the backing array through `heap_slot`, which is what makes decrease-key
/// logarithmic instead of linear. Every sift must keep `heap_slot` in
/// lockstep with the array — if they diverge, later decrease-key calls sift
/// from the wrong slot and silently produce wrong distances.
///
/// Once extracted, a node's distance is final and it is never reinserted.
#[derive(Debug)]
pub struct MinHeap {
    /// 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2
    slots: Vec<NodeIdx>,
}

impl MinHeap {
    /// Builds a heap holding every node currently in the graph and records
    /// each node's slot.
    ///
    /// All distances are expected to still be at infinity (a fresh or reset
    /// graph), so any ordering is a valid heap; the order among equal keys is
    /// unspecified. The source's distance is lowered afterwards through
    /// [`MinHeap::decrease_distance`].
    pub fn from_graph<W>(graph: &mut DirectedGraph<W>) -> Self
    where
        W: Copy + Ord + Bounded + Debug,
    {
        let slots: Vec<NodeIdx> = (0..graph.node_count()).collect();
        for (slot, &idx) in slots.iter().enumerate() {
            graph.node_mut(idx).heap_slot = Some(slot);
        }
        MinHeap { slots }
    }

    /// Returns true if no nodes remain in the heap
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of nodes still enqueued
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Lowers a node's key and records its new predecessor, then restores
    /// heap order by sifting the node upward from its current slot.
    ///
    /// Callers must only pass nodes still present in the heap with a
    /// `new_distance` no larger than the current one; the relaxation step of
    /// Dijkstra guarantees both. A node that was already extracted is left
    /// untouched (debug-asserted, since it indicates a caller bug).
    pub fn decrease_distance<W>(
        &mut self,
        graph: &mut DirectedGraph<W>,
        idx: NodeIdx,
        new_distance: W,
        new_previous: Option<NodeIdx>,
    ) where
        W: Copy + Ord + Bounded + Debug,
    {
        let node = graph.node_mut(idx);
        let slot = match node.heap_slot {
            Some(slot) => slot,
            None => {
                debug_assert!(false, "decrease_distance on extracted node {}", node.id());
                return;
            }
        };
        debug_assert!(
            new_distance <= node.distance,
            "decrease_distance must not raise a key"
        );
        node.distance = new_distance;
        node.previous = new_previous;
        self.sift_up(graph, slot);
    }

    /// Removes and returns the node with the smallest distance, or `None` if
    /// the heap is empty. Ties are broken arbitrarily.
    ///
    /// The extracted node's `heap_slot` is cleared; its distance is final.
    pub fn extract_min<W>(&mut self, graph: &mut DirectedGraph<W>) -> Option<NodeIdx>
    where
        W: Copy + Ord + Bounded + Debug,
    {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let min = self.slots.pop()?;
        graph.node_mut(min).heap_slot = None;
        if !self.slots.is_empty() {
            graph.node_mut(self.slots[0]).heap_slot = Some(0);
            self.sift_down(graph, 0);
        }
        Some(min)
    }

    /// Swaps two slots and rewrites both nodes' recorded positions.
    fn swap_slots<W>(&mut self, graph: &mut DirectedGraph<W>, a: usize, b: usize)
    where
        W: Copy + Ord + Bounded + Debug,
    {
        self.slots.swap(a, b);
        graph.node_mut(self.slots[a]).heap_slot = Some(a);
        graph.node_mut(self.slots[b]).heap_slot = Some(b);
    }

    fn sift_up<W>(&mut self, graph: &mut DirectedGraph<W>, mut slot: usize)
    where
        W: Copy + Ord + Bounded + Debug,
    {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if graph.node(self.slots[slot]).distance < graph.node(self.slots[parent]).distance {
                self.swap_slots(graph, slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down<W>(&mut self, graph: &mut DirectedGraph<W>, mut slot: usize)
    where
        W: Copy + Ord + Bounded + Debug,
    {
        let len = self.slots.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len
                && graph.node(self.slots[left]).distance
                    < graph.node(self.slots[smallest]).distance
            {
                smallest = left;
            }
            if right < len
                && graph.node(self.slots[right]).distance
                    < graph.node(self.slots[smallest]).distance
            {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap_slots(graph, slot, smallest);
            slot = smallest;
        }
    }
}
