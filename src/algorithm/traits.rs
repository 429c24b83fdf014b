use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;
use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Counters collected while solving
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Relaxation rounds for Bellman-Ford, settled vertices for Dijkstra
    pub rounds: usize,

    /// Number of successful relaxations
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution.
///
/// Holds one entry per graph vertex, in the graph's insertion order. Unreachable
/// vertices have an infinite distance and no predecessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Source vertex
    pub(crate) source: V,

    /// Vertex labels, position matches `distances` and `predecessors`
    pub(crate) vertices: Vec<V>,

    /// Distances from source to each vertex
    pub(crate) distances: Vec<W>,

    /// Predecessor (as an index into `vertices`) in the shortest path tree
    pub(crate) predecessors: Vec<Option<usize>>,

    pub(crate) stats: SolveStats,

    #[serde(skip)]
    index: HashMap<V, usize>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    pub(crate) fn from_solver<G>(
        graph: &G,
        source: usize,
        distances: Vec<W>,
        predecessors: Vec<Option<usize>>,
        stats: SolveStats,
    ) -> Self
    where
        G: Graph<V, W>,
    {
        let vertices: Vec<V> = (0..graph.vertex_count())
            .filter_map(|i| graph.label(i).cloned())
            .collect();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        ShortestPathResult {
            source: vertices[source].clone(),
            vertices,
            distances,
            predecessors,
            stats,
            index,
        }
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Vertex the solve started from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Vertex labels in graph order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Distances in graph order, infinite for unreachable vertices
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Predecessors in graph order, as indices into [`vertices`](Self::vertices)
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Counters from the solve
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Distance to `vertex`, infinite when unreachable. `None` if the vertex is unknown.
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.index_of(vertex).map(|i| self.distances[i])
    }

    /// Predecessor of `vertex` on its shortest path. `None` for the source,
    /// unreachable vertices and unknown vertices.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        let i = self.index_of(vertex)?;
        self.predecessors[i].map(|p| &self.vertices[p])
    }

    /// Returns true if `vertex` was part of the solved graph
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// `(vertex, distance, predecessor)` for every vertex, in graph order
    pub fn iter(&self) -> impl Iterator<Item = (&V, W, Option<&V>)> + '_ {
        self.vertices.iter().enumerate().map(move |(i, v)| {
            (v, self.distances[i], self.predecessors[i].map(|p| &self.vertices[p]))
        })
    }

    pub fn distance_map(&self) -> HashMap<V, W> {
        self.iter().map(|(v, d, _)| (v.clone(), d)).collect()
    }

    pub fn predecessor_map(&self) -> HashMap<V, Option<V>> {
        self.iter().map(|(v, _, p)| (v.clone(), p.cloned())).collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<V, W, G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>;
}
