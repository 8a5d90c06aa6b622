//! Graphlet: an educational graph library with two classic representations.
//!
//! A directed weighted graph backed by a dense adjacency matrix, and an
//! undirected unweighted graph backed by a label-keyed adjacency list. Each
//! exposes the same family of read-only algorithms over its own storage
//! layout: depth-first and breadth-first traversal, cycle detection, plus
//! connected-component counting (undirected) and single-source shortest
//! paths (directed).

pub mod cli;
pub mod directed;
pub mod types;
pub mod undirected;

// Re-export commonly used items at the crate root
pub use directed::{dijkstra, DirectedGraph};
pub use types::{GraphError, GraphResult, VertexId, Weight};
pub use undirected::{count_connected_components, UndirectedGraph};
