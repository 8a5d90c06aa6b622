//! Undirected unweighted graph: label-keyed adjacency-list representation.

pub mod components;
pub mod cycle;
pub mod graph;
pub mod traversal;

pub use components::count_connected_components;
pub use cycle::has_cycle;
pub use graph::UndirectedGraph;
pub use traversal::{bfs, dfs};
