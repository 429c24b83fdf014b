use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, SolveStats};
use crate::data_structures::DistanceQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// How Dijkstra picks the next vertex to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every unvisited vertex. O(V^2), no allocation beyond the visited set.
    LinearScan,
    /// Binary heap keyed by tentative distance. O((V + E) log V).
    #[default]
    BinaryHeap,
}

/// Classic Dijkstra's algorithm implementation.
///
/// Follows stored arcs only; graphs built with undirected insertion already hold
/// both directions. Ties between equally distant vertices go to the one inserted
/// first, so both selection strategies produce identical results.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    selection: Selection,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the strategy used to pick the next vertex to settle
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Returns the active selection strategy
    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn check_non_negative<V, W, G>(graph: &G) -> Result<()>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let label = |i: usize| graph.label(i).map_or_else(|| i.to_string(), |v| format!("{:?}", v));
        for from in 0..graph.vertex_count() {
            if let Some((to, weight)) = graph.outgoing_edges(from).find(|(_, w)| *w < W::zero()) {
                warn!(
                    "dijkstra refused graph with negative arc {} -> {}",
                    label(from),
                    label(to)
                );
                return Err(Error::NegativeWeight {
                    from: label(from),
                    to: label(to),
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    fn relax<V, W, G>(
        graph: &G,
        u: usize,
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
        visited: &[bool],
        stats: &mut SolveStats,
        mut on_update: impl FnMut(usize, W),
    ) where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let dist_u = distances[u];
        for (v, weight) in graph.outgoing_edges(u) {
            if visited[v] {
                continue;
            }
            let new_dist = dist_u + weight;
            if new_dist < distances[v] {
                trace!("relax {} -> {}: {:?} -> {:?}", u, v, distances[v], new_dist);
                distances[v] = new_dist;
                predecessors[v] = Some(u);
                stats.relaxations += 1;
                on_update(v, new_dist);
            }
        }
    }

    fn run_linear_scan<V, W, G>(
        graph: &G,
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
        stats: &mut SolveStats,
    ) where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let n = graph.vertex_count();
        let mut visited = vec![false; n];

        loop {
            // Strict comparison keeps the earliest inserted vertex among ties
            let mut current: Option<usize> = None;
            for v in (0..n).filter(|&v| !visited[v]) {
                if current.map_or(true, |c| distances[v] < distances[c]) {
                    current = Some(v);
                }
            }

            let u = match current {
                Some(u) if distances[u] != W::infinity() => u,
                // Everything left is unreachable
                _ => break,
            };

            visited[u] = true;
            stats.rounds += 1;
            Self::relax::<V, W, G>(graph, u, distances, predecessors, &visited, stats, |_, _| {});
        }
    }

    fn run_binary_heap<V, W, G>(
        graph: &G,
        source: usize,
        distances: &mut [W],
        predecessors: &mut [Option<usize>],
        stats: &mut SolveStats,
    ) where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        let n = graph.vertex_count();
        let mut visited = vec![false; n];
        let mut queue = DistanceQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Skip stale entries
            if visited[u] || dist_u > distances[u] {
                continue;
            }

            visited[u] = true;
            stats.rounds += 1;
            Self::relax::<V, W, G>(graph, u, distances, predecessors, &visited, stats, |v, d| {
                queue.push(v, d)
            });
        }
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
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

        // The graph may not have been built with a non-negative policy
        Self::check_non_negative::<V, W, G>(graph)?;

        let n = graph.vertex_count();
        debug!(
            "dijkstra ({:?}) from {:?}: {} vertices, {} arcs",
            self.selection,
            source,
            n,
            graph.edge_count()
        );

        // Initialize distances and predecessors
        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![None; n];
        distances[source_index] = W::zero();

        let mut stats = SolveStats::default();
        match self.selection {
            Selection::LinearScan => {
                Self::run_linear_scan::<V, W, G>(graph, &mut distances, &mut predecessors, &mut stats)
            }
            Selection::BinaryHeap => Self::run_binary_heap::<V, W, G>(
                graph,
                source_index,
                &mut distances,
                &mut predecessors,
                &mut stats,
            ),
        }

        debug!(
            "dijkstra settled {} of {} vertices, {} relaxations",
            stats.rounds, n, stats.relaxations
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

/// Runs Dijkstra with the default (binary heap) selection
pub fn dijkstra<V, W, G>(graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
