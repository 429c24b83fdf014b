use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;
use serde::Serialize;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// A concrete shortest path and its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V, W> {
    pub distance: W,

    /// Vertices from source to target, both included
    pub path: Vec<V>,
}

/// Walks the predecessor chain back from `end` and returns the path in forward order.
///
/// Fails with [`Error::UnknownVertex`] if `end` is not in the result and with
/// [`Error::NoPath`] if `end` is unreachable from the source. A path to the source
/// itself is the single vertex with distance zero.
pub fn reconstruct_path<V, W>(result: &ShortestPathResult<V, W>, end: &V) -> Result<PathResult<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    let end_index = result
        .index_of(end)
        .ok_or_else(|| Error::unknown_vertex(end))?;

    let no_path = || Error::NoPath {
        from: format!("{:?}", result.source),
        to: format!("{:?}", end),
    };

    let distance = result.distances[end_index];
    if !distance.is_finite() {
        return Err(no_path());
    }

    let mut path = Vec::new();
    let mut current = Some(end_index);
    while let Some(index) = current {
        // A well-formed tree never revisits a vertex
        if path.len() >= result.vertices.len() {
            return Err(no_path());
        }
        path.push(result.vertices[index].clone());
        current = result.predecessors[index];
    }
    path.reverse();

    if path.first() != Some(&result.source) {
        return Err(no_path());
    }

    Ok(PathResult { distance, path })
}

/// Runs `algorithm` from `start` and reconstructs the path to `end`.
///
/// Both endpoints are checked against the graph before anything is computed.
pub fn shortest_path<A, V, W, G>(algorithm: &A, graph: &G, start: &V, end: &V) -> Result<PathResult<V, W>>
where
    A: ShortestPathAlgorithm,
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    if !graph.has_vertex(end) {
        return Err(Error::unknown_vertex(end));
    }
    let result = algorithm.compute_shortest_paths(graph, start)?;
    reconstruct_path(&result, end)
}

/// Sums arc weights along `path`.
///
/// Returns `None` for an empty path or if two consecutive vertices are not joined
/// by an arc. A single vertex weighs zero.
pub fn path_weight<V, W, G>(graph: &G, path: &[V]) -> Option<W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    if path.is_empty() || !graph.has_vertex(&path[0]) {
        return None;
    }
    path.windows(2)
        .try_fold(W::zero(), |total, pair| {
            graph.edge_weight(&pair[0], &pair[1]).map(|w| total + w)
        })
}
