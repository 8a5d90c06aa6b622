//! Error types for the graphlet library.

use thiserror::Error;

/// All errors that can occur in the graphlet library.
///
/// Invalid mutations are silent no-ops and traversals from a missing
/// vertex return empty results, so errors only surface where absence
/// cannot stand in for failure: a shortest-path query from a vertex that
/// does not exist, and malformed CLI input.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside the matrix bounds.
    #[error("Vertex index {index} out of range (graph has {count} vertices)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Edge weight that the directed graph would never store.
    #[error("Invalid edge weight {0}: weights must be positive")]
    InvalidWeight(i64),

    /// Malformed edge-list or vertex text from the CLI.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience result type for graphlet operations.
pub type GraphResult<T> = Result<T, GraphError>;
