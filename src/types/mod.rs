//! Shared types for the graphlet library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Dense vertex index used by the adjacency-matrix representation.
pub type VertexId = usize;

/// Edge weight in the directed graph. Zero means "no edge".
pub type Weight = u64;
