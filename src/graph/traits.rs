use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Read-only view of a weighted graph with labelled vertices.
///
/// Vertices are addressed by a dense index assigned in insertion order. The
/// solvers work on indices and translate back to labels when they build results.
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored arcs. An undirected edge counts twice.
    fn edge_count(&self) -> usize;

    /// Returns the index of a vertex label, if present
    fn index_of(&self, vertex: &V) -> Option<usize>;

    /// Returns the label stored at an index
    fn label(&self, index: usize) -> Option<&V>;

    /// Returns an iterator over the outgoing arcs of a vertex, in insertion order
    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Gets the weight of an arc if it exists
    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns true if there's an arc from `from` to `to`
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

/// Insertion operations. There is no removal.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Adds a vertex if absent. Returns whether it was newly added.
    fn insert_vertex(&mut self, vertex: V) -> bool;

    /// Records `weight` for `from -> to`, and for `to -> from` as well when
    /// `directed` is false. Missing endpoints are inserted first.
    fn insert_edge(&mut self, from: V, to: V, weight: W, directed: bool) -> Result<()>;
}
