use std::env;
use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;
use weighted_paths::graph::generators::random_undirected;
use weighted_paths::{
    BellmanFord, Dijkstra, Graph, Selection, ShortestPathAlgorithm, ShortestPathResult, WeightedGraph,
};

#[derive(Debug, Serialize)]
struct Timing {
    algorithm: &'static str,
    vertices: usize,
    arcs: usize,
    reachable: usize,
    millis: f64,
}

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    label: &'static str,
    algorithm: &A,
    graph: &WeightedGraph<usize, f64>,
    source: usize,
) -> Result<(Duration, ShortestPathResult<usize, f64>), weighted_paths::Error>
where
    A: ShortestPathAlgorithm,
{
    info!("running {} ({}) on {} vertices", label, algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    Ok((duration, result))
}

fn agree(a: &ShortestPathResult<usize, f64>, b: &ShortestPathResult<usize, f64>) -> bool {
    a.distances().len() == b.distances().len()
        && a.distances().iter().zip(b.distances()).all(|(x, y)| {
            (x.is_infinite() && y.is_infinite()) || (x - y).abs() < 1e-9
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes may be given on the command line
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![100, 500, 1_000, 2_000]
    } else {
        args.iter().map(|s| s.parse()).collect::<Result<_, _>>()?
    };
    let edge_factor = 4.0;

    let mut timings = Vec::new();
    for (seed, &n) in graph_sizes.iter().enumerate() {
        let graph = random_undirected(n, edge_factor, seed as u64)?;
        println!("Graph: {} vertices, {} arcs", graph.vertex_count(), graph.edge_count());

        let bellman = BellmanFord::new();
        let scan = Dijkstra::new().with_selection(Selection::LinearScan);
        let heap = Dijkstra::new().with_selection(Selection::BinaryHeap);
        let runs = vec![
            ("bellman-ford", benchmark_algorithm("bellman-ford", &bellman, &graph, 0)?),
            ("dijkstra-scan", benchmark_algorithm("dijkstra-scan", &scan, &graph, 0)?),
            ("dijkstra-heap", benchmark_algorithm("dijkstra-heap", &heap, &graph, 0)?),
        ];

        let reference = &runs[0].1 .1;
        for (name, (duration, result)) in &runs {
            println!("  {:<14} {:>10.3} ms", name, duration.as_secs_f64() * 1000.0);
            if !agree(reference, result) {
                return Err(format!("{} disagrees with bellman-ford on {} vertices", name, n).into());
            }

            timings.push(Timing {
                algorithm: *name,
                vertices: n,
                arcs: graph.edge_count(),
                reachable: result.distances().iter().filter(|d| d.is_finite()).count(),
                millis: duration.as_secs_f64() * 1000.0,
            });
        }
    }

    println!("{}", serde_json::to_string_pretty(&timings)?);
    Ok(())
}
