//! Single-source shortest paths over the adjacency matrix.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::types::{GraphError, GraphResult, VertexId, Weight};

use super::DirectedGraph;

/// Dijkstra's single-source shortest paths via binary heap.
///
/// Returns one entry per vertex: `Some(distance)` for reachable vertices
/// and `None` for unreachable ones. Fails when `src` is not a vertex of
/// the graph.
///
/// Time: O((V + E) log V) plus the O(V) row scan per settled vertex.
pub fn dijkstra(graph: &DirectedGraph, src: VertexId) -> GraphResult<Vec<Option<Weight>>> {
    let count = graph.vertex_count();
    if src >= count {
        return Err(GraphError::IndexOutOfRange { index: src, count });
    }

    let mut distances: Vec<Option<Weight>> = vec![None; count];
    distances[src] = Some(0);

    let mut heap: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, src)));

    while let Some(Reverse((dist, vertex))) = heap.pop() {
        // Skip stale entries: a shorter path was already settled.
        if matches!(distances[vertex], Some(best) if dist > best) {
            continue;
        }
        for (next, weight) in graph.neighbors(vertex) {
            let candidate = dist + weight;
            if distances[next].map_or(true, |best| candidate < best) {
                distances[next] = Some(candidate);
                heap.push(Reverse((candidate, next)));
            }
        }
    }
    Ok(distances)
}
