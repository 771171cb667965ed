//! Rendering of a finished search's path as a Graphviz `digraph`.

use std::fmt::{Debug, Display};
use std::io::{self, Write};
use std::ops::Sub;

use num_traits::Bounded;

use crate::graph::{DirectedGraph, NodeId, NodeIdx};

/// Writes the shortest path ending at `target` as a dot digraph.
///
/// Walks `previous` links backward from the target, emitting one edge line
/// per link with the edge's actual weight (the difference of the endpoints'
/// finalized distances) as its label. The first line is therefore the edge
/// closest to the target and the last the edge leaving the source. The walk
/// stops when it reaches the node whose id is `source_id` - not when
/// `previous` runs out, since the source's `previous` is `None` just like an
/// unreached node's.
///
/// If the target is the source, only the envelope is emitted. Callers must
/// have checked that the target's distance is finite.
pub fn write_path<O, W>(
    out: &mut O,
    graph: &DirectedGraph<W>,
    source_id: NodeId,
    target: NodeIdx,
) -> io::Result<()>
where
    O: Write,
    W: Copy + Ord + Bounded + Sub<Output = W> + Display + Debug,
{
    writeln!(out, "digraph {{")?;
    if graph.node(target).id() != source_id {
        let mut current = target;
        while graph.node(current).id() != source_id {
            let previous = match graph.node(current).previous() {
                Some(previous) => previous,
                // A finite-distance node always chains back to the source;
                // stop rather than spin if handed an unreached target.
                None => break,
            };
            writeln!(
                out,
                "\t{} -> {} [label={}];",
                graph.node(previous).id(),
                graph.node(current).id(),
                graph.node(current).distance() - graph.node(previous).distance()
            )?;
            current = previous;
        }
    }
    writeln!(out, "}}")
}
