use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::warn;
use num_traits::Float;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Which edge weights a graph accepts on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeightPolicy {
    /// Any finite weight. Suitable for Bellman-Ford.
    AllowNegative,
    /// Negative weights are rejected with [`Error::NegativeWeight`]. Suitable for Dijkstra.
    NonNegative,
}

/// A weighted graph keyed by vertex labels, stored as adjacency lists
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    policy: WeightPolicy,

    /// Vertex labels in insertion order; position is the vertex index
    labels: Vec<V>,

    /// label -> index
    index: HashMap<V, usize>,

    /// Outgoing arcs for each vertex index: [(target_index, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph accepting negative weights
    pub fn new() -> Self {
        Self::with_policy(WeightPolicy::AllowNegative)
    }

    /// Creates a new empty graph that rejects negative weights
    pub fn non_negative() -> Self {
        Self::with_policy(WeightPolicy::NonNegative)
    }

    /// Creates a new empty graph with the given weight policy
    pub fn with_policy(policy: WeightPolicy) -> Self {
        WeightedGraph {
            policy,
            labels: Vec::new(),
            index: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Returns the weight policy applied on insertion
    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// Vertex labels in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.labels
    }

    /// Read-only view of a vertex's neighbors with their weights, in insertion order.
    /// Returns `None` for an unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = (&V, W)> + '_> {
        let from = self.index_of(vertex)?;
        Some(
            self.outgoing_edges[from]
                .iter()
                .map(move |&(to, weight)| (&self.labels[to], weight)),
        )
    }

    /// Every stored arc as `(from, to, weight)`, ordered by source insertion order
    /// and then by neighbor insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.outgoing_edges.iter().enumerate().flat_map(move |(from, edges)| {
            edges
                .iter()
                .map(move |&(to, weight)| (&self.labels[from], &self.labels[to], weight))
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Removes every vertex and edge. The weight policy is kept.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.index.clear();
        self.outgoing_edges.clear();
    }

    fn check_weight(&self, from: &V, to: &V, weight: W) -> Result<()> {
        if !weight.is_finite() {
            warn!("rejected non-finite weight on {:?} -> {:?}", from, to);
            return Err(Error::NonFiniteWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            });
        }
        if self.policy == WeightPolicy::NonNegative && weight < W::zero() {
            warn!("rejected negative weight {:?} on {:?} -> {:?}", weight, from, to);
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.index.get(&vertex) {
            return index;
        }
        let index = self.labels.len();
        self.index.insert(vertex.clone(), index);
        self.labels.push(vertex);
        self.outgoing_edges.push(Vec::new());
        index
    }

    /// Sets the weight of `from -> to`, overwriting in place if the arc exists
    fn set_arc(&mut self, from: usize, to: usize, weight: W) {
        let edges = &mut self.outgoing_edges[from];
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn label(&self, index: usize) -> Option<&V> {
        self.labels.get(index)
    }

    fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(index) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.intern(vertex);
        true
    }

    fn insert_edge(&mut self, from: V, to: V, weight: W, directed: bool) -> Result<()> {
        // Validate before touching the vertex set so a rejected edge leaves no trace
        self.check_weight(&from, &to, weight)?;

        let from = self.intern(from);
        let to = self.intern(to);
        self.set_arc(from, to, weight);
        if !directed {
            self.set_arc(to, from, weight);
        }
        Ok(())
    }
}
