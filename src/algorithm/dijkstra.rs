use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Bounded, CheckedAdd, Zero};

use crate::data_structures::MinHeap;
use crate::graph::{DirectedGraph, NodeId, NodeIdx};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a [`DirectedGraph`], using the
/// decrease-key [`MinHeap`].
///
/// The search writes its results (distances and predecessor links) into the
/// graph's nodes rather than returning a separate table; the path renderer
/// reads them back out. Correctness requires non-negative weights, which the
/// unsigned weight types enforce.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes shortest paths from the node with id `source_id`, stopping
    /// early once `target` (an arena slot, if the caller has one) is
    /// finalized.
    ///
    /// Any previous search state on the graph is discarded first, so running
    /// the same search twice yields identical distances and predecessors.
    /// Nodes that remain at `W::max_value()` afterwards are unreachable.
    pub fn shortest_path<W>(
        &self,
        graph: &mut DirectedGraph<W>,
        source_id: NodeId,
        target: Option<NodeIdx>,
    ) -> Result<()>
    where
        W: Copy + Ord + Zero + Bounded + CheckedAdd + Debug,
    {
        graph.reset_search_state();
        let mut heap = MinHeap::from_graph(graph);

        let source = graph
            .get(source_id)
            .ok_or(Error::InvalidSource(source_id))?;
        heap.decrease_distance(graph, source, W::zero(), None);

        let mut settled = 0usize;
        while let Some(node) = heap.extract_min(graph) {
            let distance = graph.node(node).distance();
            if distance == W::max_value() {
                // The minimum is infinite: every remaining node is
                // unreachable and keeps its sentinel distance.
                break;
            }
            settled += 1;

            for i in 0..graph.node(node).edges().len() {
                let edge = graph.node(node).edges()[i];
                // Saturate on overflow; a saturated candidate can never win
                // a relaxation against anything reachable.
                let candidate = distance
                    .checked_add(&edge.weight)
                    .unwrap_or_else(W::max_value);
                if candidate < graph.node(edge.to).distance() {
                    trace!(
                        "relax {} -> {}: {:?}",
                        graph.node(node).id(),
                        graph.node(edge.to).id(),
                        candidate
                    );
                    heap.decrease_distance(graph, edge.to, candidate, Some(node));
                }
            }

            if Some(node) == target {
                // Extraction order is nondecreasing in distance, so the
                // target's distance is already final.
                break;
            }
        }

        debug!("settled {} of {} nodes", settled, graph.node_count());
        Ok(())
    }
}
