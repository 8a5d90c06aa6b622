//! Core storage for the undirected unweighted graph.

use std::collections::BTreeMap;
use std::fmt;

/// Undirected unweighted graph over arbitrary string labels.
///
/// Each vertex maps to its neighbor list. The structure is kept
/// symmetric (`u` appears in `v`'s list exactly when `v` appears in
/// `u`'s), with no self-loops and no duplicate entries within a list.
/// Neighbor lists keep insertion order; traversals sort a copy rather
/// than the stored list, so read-only queries never reorder the graph.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    neighbors: BTreeMap<String, Vec<String>>,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            neighbors: BTreeMap::new(),
        }
    }

    /// Build a graph from an edge list. Endpoints are created as needed.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of edges. Every edge appears in two neighbor lists.
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Add a vertex. Ignored when the label already exists.
    pub fn add_vertex(&mut self, v: impl Into<String>) {
        self.neighbors.entry(v.into()).or_default();
    }

    /// Add an edge between `u` and `v`, creating missing endpoints.
    ///
    /// Silently ignored on a self-loop; adding an edge that already
    /// exists changes nothing (no duplicate entries).
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>) {
        let u = u.into();
        let v = v.into();
        if u == v {
            return;
        }
        let list = self.neighbors.entry(u.clone()).or_default();
        if !list.contains(&v) {
            list.push(v.clone());
        }
        let list = self.neighbors.entry(v).or_default();
        if !list.contains(&u) {
            list.push(u);
        }
    }

    /// Remove the edge between `u` and `v`.
    ///
    /// Silently ignored when either endpoint or the edge itself is
    /// missing.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if !self.neighbors.contains_key(u) || !self.neighbors.contains_key(v) {
            return;
        }
        if let Some(list) = self.neighbors.get_mut(u) {
            list.retain(|label| label != v);
        }
        if let Some(list) = self.neighbors.get_mut(v) {
            list.retain(|label| label != u);
        }
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Silently ignored when the label is missing.
    pub fn remove_vertex(&mut self, v: &str) {
        if self.neighbors.remove(v).is_none() {
            return;
        }
        for list in self.neighbors.values_mut() {
            list.retain(|label| label != v);
        }
    }

    /// Whether `v` is a vertex of the graph.
    pub fn contains(&self, v: &str) -> bool {
        self.neighbors.contains_key(v)
    }

    /// All vertex labels in sorted order.
    pub fn vertices(&self) -> Vec<String> {
        self.neighbors.keys().cloned().collect()
    }

    /// All edges as `(u, v)` pairs, each edge reported once in the
    /// direction it is first encountered.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = Vec::new();
        for (u, list) in &self.neighbors {
            for v in list {
                let already = out.iter().any(|(a, b)| a == v && b == u);
                if !already {
                    out.push((u.clone(), v.clone()));
                }
            }
        }
        out
    }

    /// Neighbor labels of `v` in stored insertion order. Empty for a
    /// missing vertex.
    pub fn neighbors_of(&self, v: &str) -> &[String] {
        self.neighbors.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether consecutive labels in `path` are all connected by edges.
    ///
    /// The empty path is trivially valid; a single vertex is valid when
    /// it exists in the graph.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        match path {
            [] => true,
            [only] => self.contains(only.as_ref()),
            _ => path.windows(2).all(|pair| {
                self.neighbors_of(pair[1].as_ref())
                    .iter()
                    .any(|label| label.as_str() == pair[0].as_ref())
            }),
        }
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .neighbors
            .iter()
            .map(|(v, list)| format!("{}: [{}]", v, list.join(", ")))
            .collect();
        write!(f, "GRAPH: {{{}}}", entries.join(", "))
    }
}
