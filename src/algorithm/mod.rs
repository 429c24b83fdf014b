pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;
pub mod path;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, SolveStats};
