//! Cycle detection over the adjacency list.

use std::collections::HashSet;

use super::traversal::sorted_neighbors;
use super::UndirectedGraph;

/// Whether the graph contains a cycle.
///
/// Runs a parent-tracked DFS from every vertex, each with a fresh
/// visited set, so cycles are found in any component regardless of the
/// scan order.
pub fn has_cycle(graph: &UndirectedGraph) -> bool {
    graph
        .vertices()
        .iter()
        .any(|start| cycle_from(graph, start))
}

/// Parent-tracked DFS from a single start vertex.
///
/// Stack entries are `(vertex, parent)`. While expanding a newly visited
/// vertex, meeting an already-visited neighbor other than the immediate
/// parent is a back edge and closes a cycle. The parent exclusion is
/// what keeps a single edge (one neighbor each way) from counting.
fn cycle_from(graph: &UndirectedGraph, start: &str) -> bool {
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack: Vec<(String, Option<String>)> = vec![(start.to_string(), None)];

    while let Some((vertex, parent)) = stack.pop() {
        if !seen.insert(vertex.clone()) {
            continue;
        }
        for next in sorted_neighbors(graph, &vertex).into_iter().rev() {
            if seen.contains(&next) && parent.as_deref() != Some(next.as_str()) {
                return true;
            }
            stack.push((next, Some(vertex.clone())));
        }
    }
    false
}
