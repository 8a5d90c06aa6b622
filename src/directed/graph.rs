//! Core storage for the directed weighted graph.

use std::fmt;

use crate::types::{VertexId, Weight};

/// Directed weighted graph over dense integer vertex indices.
///
/// Vertices are `0..vertex_count()` with no gaps; they are only ever
/// appended, never removed. Edges live in a square weight matrix where
/// zero means "no edge" and any positive value is the edge weight.
/// Self-loops and zero weights are never stored, so `weights[i][i]` is
/// always zero.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Square weight matrix, always `vertex_count x vertex_count`.
    weights: Vec<Vec<Weight>>,
}

impl DirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
        }
    }

    /// Build a graph from an edge list.
    ///
    /// The vertex count is derived from the largest index mentioned;
    /// edges that fail validation are dropped like any other `add_edge`.
    pub fn from_edges(edges: &[(VertexId, VertexId, Weight)]) -> Self {
        let mut graph = Self::new();
        let count = edges
            .iter()
            .map(|&(src, dst, _)| src.max(dst) + 1)
            .max()
            .unwrap_or(0);
        while graph.vertex_count() < count {
            graph.add_vertex();
        }
        for &(src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Number of vertices. Monotonically non-decreasing.
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .flatten()
            .filter(|&&weight| weight != 0)
            .count()
    }

    /// Append a new vertex, growing the matrix by one row and one column.
    /// Returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        let count = self.weights.len() + 1;
        for row in &mut self.weights {
            row.push(0);
        }
        self.weights.push(vec![0; count]);
        count
    }

    /// Add an edge from `src` to `dst`, updating the weight when the edge
    /// already exists.
    ///
    /// Silently ignored on a self-loop, an out-of-range endpoint, or a
    /// zero weight.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: Weight) {
        if weight == 0 || src == dst {
            return;
        }
        if src >= self.weights.len() || dst >= self.weights.len() {
            return;
        }
        self.weights[src][dst] = weight;
    }

    /// Remove the edge from `src` to `dst`.
    ///
    /// Silently ignored when either endpoint is out of range or no such
    /// edge exists.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) {
        if src >= self.weights.len() || dst >= self.weights.len() {
            return;
        }
        self.weights[src][dst] = 0;
    }

    /// Weight of the edge `src -> dst`, or zero when absent or out of
    /// range.
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Weight {
        self.weights
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `v` is a valid vertex index.
    pub fn contains(&self, v: VertexId) -> bool {
        v < self.weights.len()
    }

    /// All vertex indices in ascending order.
    pub fn vertices(&self) -> Vec<VertexId> {
        (0..self.weights.len()).collect()
    }

    /// All edges as `(src, dst, weight)` tuples in row-major order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId, Weight)> {
        let mut out = Vec::new();
        for (src, row) in self.weights.iter().enumerate() {
            for (dst, &weight) in row.iter().enumerate() {
                if weight != 0 {
                    out.push((src, dst, weight));
                }
            }
        }
        out
    }

    /// Out-neighbors of `v` with weights, in ascending index order.
    /// Empty for an out-of-range index.
    pub fn neighbors(&self, v: VertexId) -> Vec<(VertexId, Weight)> {
        match self.weights.get(v) {
            Some(row) => row
                .iter()
                .enumerate()
                .filter(|&(_, &weight)| weight != 0)
                .map(|(dst, &weight)| (dst, weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether consecutive vertices in `path` are all connected by edges.
    ///
    /// The empty path is trivially valid; a single vertex is valid when
    /// it exists in the graph.
    pub fn is_valid_path(&self, path: &[VertexId]) -> bool {
        if path.is_empty() {
            return true;
        }
        if !path.iter().all(|&v| self.contains(v)) {
            return false;
        }
        path.windows(2).all(|pair| self.weights[pair[0]][pair[1]] != 0)
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.vertex_count();
        if count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }
        writeln!(f, "GRAPH ({} vertices):", count)?;
        let header: Vec<String> = (0..count).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(count * 3 + 3))?;
        for (i, row) in self.weights.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|w| format!("{:2}", w)).collect();
            writeln!(f, "{:2} |{}", i, cells.join(" "))?;
        }
        Ok(())
    }
}
