//! Connected-component counting over the adjacency list.

use std::collections::HashSet;

use super::traversal::dfs;
use super::UndirectedGraph;

/// Number of maximal connected subsets of vertices.
///
/// Scans vertices in stored order; each vertex not yet claimed by an
/// earlier component seeds a DFS whose entire visit set becomes one
/// component. O(V + E) amortized across components.
pub fn count_connected_components(graph: &UndirectedGraph) -> usize {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut count = 0;

    for vertex in graph.vertices() {
        if claimed.contains(&vertex) {
            continue;
        }
        count += 1;
        for reached in dfs(graph, &vertex, None) {
            claimed.insert(reached);
        }
    }
    count
}
