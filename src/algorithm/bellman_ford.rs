use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, SolveStats};
use crate::graph::Graph;
use crate::{Error, Result};

/// Tuning for [`BellmanFord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFordConfig {
    /// Stop as soon as a full round relaxes nothing. Results are the same either way.
    pub early_termination: bool,
}

impl Default for BellmanFordConfig {
    fn default() -> Self {
        Self {
            early_termination: true,
        }
    }
}

/// Bellman-Ford over directed arcs, with negative cycle detection.
///
/// Arcs are relaxed in a fixed order (source vertex insertion order, then neighbor
/// insertion order), so ties between equal-length paths resolve the same way on
/// every run.
#[derive(Debug, Default, Clone)]
pub struct BellmanFord {
    config: BellmanFordConfig,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with the default configuration
    pub fn new() -> Self {
        BellmanFord::default()
    }

    /// Creates a Bellman-Ford instance with an explicit configuration
    pub fn with_config(config: BellmanFordConfig) -> Self {
        BellmanFord { config }
    }

    /// Enable or disable stopping after a round without relaxations
    pub fn with_early_termination(mut self, enabled: bool) -> Self {
        self.config.early_termination = enabled;
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> BellmanFordConfig {
        self.config
    }

    /// One pass over every arc. Returns the number of successful relaxations.
    fn relax_all<V, W, G>(graph: &G, distances: &mut [W], predecessors: &mut [Option<usize>]) -> usize
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let mut relaxed = 0;
        for from in 0..graph.vertex_count() {
            for (to, weight) in graph.outgoing_edges(from) {
                // Re-read per arc: a self-loop may have just lowered distances[from]
                let base = distances[from];
                if base == W::infinity() {
                    continue;
                }
                let candidate = base + weight;
                if candidate < distances[to] {
                    trace!("relax {} -> {}: {:?} -> {:?}", from, to, distances[to], candidate);
                    distances[to] = candidate;
                    predecessors[to] = Some(from);
                    relaxed += 1;
                }
            }
        }
        relaxed
    }

    /// Returns the first arc that can still be relaxed, if any
    fn find_relaxable<V, W, G>(graph: &G, distances: &[W]) -> Option<(usize, usize)>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        (0..graph.vertex_count())
            .filter(|&from| distances[from] != W::infinity())
            .find_map(|from| {
                graph
                    .outgoing_edges(from)
                    .find(|&(to, weight)| distances[from] + weight < distances[to])
                    .map(|(to, _)| (from, to))
            })
    }
}

impl ShortestPathAlgorithm for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths<V, W, G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| Error::unknown_vertex(source))?;

        let n = graph.vertex_count();
        debug!(
            "bellman-ford from {:?}: {} vertices, {} arcs",
            source,
            n,
            graph.edge_count()
        );

        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![None; n];
        distances[source_index] = W::zero();

        let mut stats = SolveStats::default();
        for _ in 0..n.saturating_sub(1) {
            stats.rounds += 1;
            let relaxed = Self::relax_all::<V, W, G>(graph, &mut distances, &mut predecessors);
            stats.relaxations += relaxed;
            if relaxed == 0 && self.config.early_termination {
                break;
            }
        }

        // A negative cycle can drive distances past the finite range; -inf no longer
        // relaxes, so the arc check below would miss it
        if let Some(v) = distances.iter().position(|d| *d == W::neg_infinity()) {
            warn!(
                "negative cycle reachable from {:?} (distance of {:?} overflowed)",
                source,
                graph.label(v)
            );
            return Err(Error::NegativeCycle);
        }

        // Any arc still relaxable after |V| - 1 rounds lies on or behind a negative cycle
        if let Some((from, to)) = Self::find_relaxable::<V, W, G>(graph, &distances) {
            warn!(
                "negative cycle reachable from {:?} (arc {:?} -> {:?} still relaxes)",
                source,
                graph.label(from),
                graph.label(to)
            );
            return Err(Error::NegativeCycle);
        }

        debug!(
            "bellman-ford done after {} rounds, {} relaxations",
            stats.rounds, stats.relaxations
        );

        Ok(ShortestPathResult::from_solver(
            graph,
            source_index,
            distances,
            predecessors,
            stats,
        ))
    }
}

/// Runs Bellman-Ford with the default configuration
pub fn bellman_ford<V, W, G>(graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    BellmanFord::new().compute_shortest_paths(graph, source)
}
