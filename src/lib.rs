//! Weighted Paths - single-source shortest paths over labelled weighted graphs
//!
//! The crate provides a mutable [`WeightedGraph`] keyed by arbitrary vertex labels
//! and two solvers that run over it:
//!
//! - [`BellmanFord`] handles negative edge weights and reports negative cycles
//!   reachable from the source.
//! - [`Dijkstra`] requires non-negative weights. Graphs meant for it are built with
//!   [`WeightedGraph::non_negative`], which rejects negative weights on insertion.
//!
//! Both produce a [`ShortestPathResult`] from which [`reconstruct_path`] materializes
//! a concrete path.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::{bellman_ford, BellmanFord, BellmanFordConfig},
    dijkstra::{dijkstra, Dijkstra, Selection},
    path::{path_weight, reconstruct_path, shortest_path, PathResult},
    ShortestPathAlgorithm, ShortestPathResult, SolveStats,
};
/// Re-export main types for convenient use
pub use graph::{Graph, MutableGraph, WeightPolicy, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("Edge weight on {from} -> {to} is not a finite number")]
    NonFiniteWeight { from: String, to: String },

    #[error("Graph contains a negative weight cycle")]
    NegativeCycle,

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
