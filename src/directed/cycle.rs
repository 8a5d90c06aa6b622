//! Cycle detection over the adjacency matrix.

use super::DirectedGraph;

/// DFS discovery state of a vertex.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet discovered.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully explored.
    Black,
}

/// Whether the graph contains a directed cycle.
///
/// Iterative three-color DFS: an edge into a gray vertex is a back edge
/// and closes a cycle. Each vertex is expanded at most once across all
/// starts, so the scan costs one row traversal per vertex on top of the
/// O(V + E) walk.
pub fn has_cycle(graph: &DirectedGraph) -> bool {
    let count = graph.vertex_count();
    let mut color = vec![Color::White; count];

    for start in 0..count {
        if color[start] != Color::White {
            continue;
        }
        color[start] = Color::Gray;
        // Each frame is (vertex, next column to scan in its matrix row).
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some(&(vertex, from)) = stack.last() {
            match (from..count).find(|&next| graph.weight(vertex, next) != 0) {
                Some(next) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 = next + 1;
                    }
                    match color[next] {
                        Color::Gray => return true,
                        Color::White => {
                            color[next] = Color::Gray;
                            stack.push((next, 0));
                        }
                        Color::Black => {}
                    }
                }
                None => {
                    color[vertex] = Color::Black;
                    stack.pop();
                }
            }
        }
    }
    false
}
