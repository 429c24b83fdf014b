use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random undirected graph with non-negative weights in `[1, 100)`.
///
/// Roughly `edge_factor * n` edges are drawn; every vertex `0..n` is present even
/// when isolated. The same seed always yields the same graph.
pub fn random_undirected(n: usize, edge_factor: f64, seed: u64) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::non_negative();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.insert_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.insert_edge(u, v, weight, false)?;
        }
    }

    Ok(graph)
}

/// Generates a random directed acyclic graph whose weights may be negative.
///
/// Arcs only run from a lower to a higher vertex number, so the graph cannot contain
/// a cycle, negative or otherwise. Weights are drawn from `[-50, 100)`.
pub fn random_dag(n: usize, edge_factor: f64, seed: u64) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.insert_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            let (u, v) = if a < b { (a, b) } else { (b, a) };
            let weight = rng.gen_range(-50.0..100.0);
            graph.insert_edge(u, v, weight, true)?;
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid where each cell is joined to its right and lower
/// neighbor by an undirected edge of weight 1. Vertices are numbered row by row.
pub fn grid(width: usize, height: usize) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::non_negative();

    for v in 0..width * height {
        graph.insert_vertex(v);
    }
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.insert_edge(vertex, vertex + 1, 1.0, false)?;
            }
            if y + 1 < height {
                graph.insert_edge(vertex, vertex + width, 1.0, false)?;
            }
        }
    }

    Ok(graph)
}
