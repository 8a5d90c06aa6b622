//! Directed graph tests: matrix storage + traversal + cycles + Dijkstra.

use graphlet::directed::{bfs, dfs, dijkstra, has_cycle, DirectedGraph};
use graphlet::types::GraphError;

/// The seven-edge graph used throughout: 0->1, 4->0, 1->4, 4->3, 3->1,
/// 2->1, 3->2.
fn sample() -> DirectedGraph {
    DirectedGraph::from_edges(&[
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ])
}

// ==================== Construction / Mutation Tests ====================

#[test]
fn test_empty_graph() {
    let graph = DirectedGraph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn test_add_vertex_returns_new_count() {
    let mut graph = DirectedGraph::new();
    assert_eq!(graph.add_vertex(), 1);
    assert_eq!(graph.add_vertex(), 2);
    assert_eq!(graph.add_vertex(), 3);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_add_edge_and_weight() {
    let mut graph = DirectedGraph::new();
    for _ in 0..3 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 10);
    assert_eq!(graph.weight(0, 1), 10);
    // Direction matters
    assert_eq!(graph.weight(1, 0), 0);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_updates_weight_idempotently() {
    let mut graph = DirectedGraph::new();
    for _ in 0..2 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 10);
    graph.add_edge(0, 1, 10);
    assert_eq!(graph.edge_count(), 1);
    graph.add_edge(0, 1, 99);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight(0, 1), 99);
}

#[test]
fn test_add_edge_rejects_self_loop() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex();
    graph.add_edge(0, 0, 5);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.weight(0, 0), 0);
}

#[test]
fn test_add_edge_rejects_out_of_range() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex();
    graph.add_edge(0, 7, 5);
    graph.add_edge(7, 0, 5);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_rejects_zero_weight() {
    let mut graph = DirectedGraph::new();
    for _ in 0..2 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge() {
    let mut graph = sample();
    graph.remove_edge(0, 1);
    assert_eq!(graph.weight(0, 1), 0);
    assert_eq!(graph.edge_count(), 6);
    // Removing a missing edge or an out-of-range pair is a no-op
    graph.remove_edge(0, 1);
    graph.remove_edge(10, 0);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_from_edges_derives_vertex_count() {
    let graph = sample();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_vertices_and_edges_enumeration() {
    let graph = sample();
    assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4]);
    // Row-major order
    assert_eq!(
        graph.edges(),
        vec![
            (0, 1, 10),
            (1, 4, 15),
            (2, 1, 23),
            (3, 1, 5),
            (3, 2, 7),
            (4, 0, 12),
            (4, 3, 3),
        ]
    );
}

#[test]
fn test_neighbors_ascending() {
    let graph = sample();
    assert_eq!(graph.neighbors(4), vec![(0, 12), (3, 3)]);
    assert_eq!(graph.neighbors(3), vec![(1, 5), (2, 7)]);
    assert!(graph.neighbors(99).is_empty());
}

// ==================== Path Validity Tests ====================

#[test]
fn test_is_valid_path() {
    let graph = sample();
    assert!(graph.is_valid_path(&[0, 1, 4, 3]));
    assert!(!graph.is_valid_path(&[1, 3, 2, 1]));
    assert!(!graph.is_valid_path(&[0, 4]));
    assert!(graph.is_valid_path(&[4, 0]));
    assert!(graph.is_valid_path(&[]));
    assert!(graph.is_valid_path(&[2]));
}

#[test]
fn test_is_valid_path_out_of_range_vertex() {
    let graph = sample();
    assert!(!graph.is_valid_path(&[9]));
    assert!(!graph.is_valid_path(&[0, 9]));
}

// ==================== Display Tests ====================

#[test]
fn test_display_empty() {
    let graph = DirectedGraph::new();
    assert_eq!(graph.to_string(), "EMPTY GRAPH\n");
}

#[test]
fn test_display_grid() {
    let mut graph = DirectedGraph::new();
    for _ in 0..2 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 9);
    let rendered = graph.to_string();
    assert!(rendered.starts_with("GRAPH (2 vertices):\n"));
    assert!(rendered.contains("   | 0  1\n"));
    assert!(rendered.contains(" 0 | 0  9\n"));
    assert!(rendered.contains(" 1 | 0  0\n"));
}

// ==================== Traversal Tests ====================

#[test]
fn test_dfs_visit_order() {
    let graph = sample();
    assert_eq!(dfs(&graph, 0, None), vec![0, 1, 4, 3, 2]);
    assert_eq!(dfs(&graph, 4, None), vec![4, 0, 1, 3, 2]);
    assert_eq!(dfs(&graph, 2, None), vec![2, 1, 4, 0, 3]);
}

#[test]
fn test_bfs_visit_order() {
    let graph = sample();
    assert_eq!(bfs(&graph, 0, None), vec![0, 1, 4, 3, 2]);
    assert_eq!(bfs(&graph, 4, None), vec![4, 0, 3, 1, 2]);
}

#[test]
fn test_traversal_from_missing_vertex_is_empty() {
    let graph = sample();
    assert!(dfs(&graph, 5, None).is_empty());
    assert!(bfs(&graph, 5, None).is_empty());
    assert!(dfs(&DirectedGraph::new(), 0, None).is_empty());
}

#[test]
fn test_dfs_stops_at_end_vertex() {
    let graph = sample();
    assert_eq!(dfs(&graph, 0, Some(4)), vec![0, 1, 4]);
    assert_eq!(dfs(&graph, 0, Some(0)), vec![0]);
}

#[test]
fn test_bfs_stops_at_end_vertex() {
    let graph = sample();
    assert_eq!(bfs(&graph, 4, Some(3)), vec![4, 0, 3]);
}

#[test]
fn test_missing_end_vertex_is_ignored() {
    let graph = sample();
    assert_eq!(dfs(&graph, 0, Some(42)), dfs(&graph, 0, None));
    assert_eq!(bfs(&graph, 0, Some(42)), bfs(&graph, 0, None));
}

#[test]
fn test_traversal_visits_each_reachable_vertex_once() {
    let graph = sample();
    // Vertex 1 has three in-edges, so it gets pushed repeatedly; it must
    // still appear exactly once.
    let visited = dfs(&graph, 4, None);
    let ones = visited.iter().filter(|&&v| v == 1).count();
    assert_eq!(ones, 1);
}

// ==================== Cycle Detection Tests ====================

#[test]
fn test_has_cycle_true_for_sample() {
    // 1 -> 4 -> 3 -> 1 closes a cycle
    assert!(has_cycle(&sample()));
}

#[test]
fn test_has_cycle_false_after_breaking_cycles() {
    let mut graph = sample();
    graph.remove_edge(3, 1);
    graph.remove_edge(4, 0);
    graph.remove_edge(3, 2);
    // Remaining edges: 0->1, 1->4, 4->3, 2->1
    assert!(!has_cycle(&graph));
}

#[test]
fn test_has_cycle_rebuilt_by_adding_edge() {
    let mut graph = sample();
    graph.remove_edge(3, 1);
    graph.remove_edge(4, 0);
    graph.remove_edge(3, 2);
    graph.add_edge(2, 3, 1);
    graph.add_edge(1, 3, 1);
    assert!(!has_cycle(&graph));
    // 0 -> 1 -> 4 -> 0
    graph.add_edge(4, 0, 1);
    assert!(has_cycle(&graph));
}

#[test]
fn test_has_cycle_two_vertex_reciprocal() {
    let mut graph = DirectedGraph::new();
    for _ in 0..2 {
        graph.add_vertex();
    }
    graph.add_edge(0, 1, 1);
    assert!(!has_cycle(&graph));
    graph.add_edge(1, 0, 1);
    assert!(has_cycle(&graph));
}

#[test]
fn test_has_cycle_trivial_graphs() {
    assert!(!has_cycle(&DirectedGraph::new()));
    let mut single = DirectedGraph::new();
    single.add_vertex();
    assert!(!has_cycle(&single));
}

#[test]
fn test_has_cycle_in_disconnected_component() {
    // 0 -> 1 acyclic, 2 -> 3 -> 4 -> 2 cyclic
    let graph = DirectedGraph::from_edges(&[(0, 1, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)]);
    assert!(has_cycle(&graph));
}

// ==================== Dijkstra Tests ====================

#[test]
fn test_dijkstra_golden_from_zero() {
    let graph = sample();
    let distances = dijkstra(&graph, 0).unwrap();
    assert_eq!(
        distances,
        vec![Some(0), Some(10), Some(35), Some(28), Some(25)]
    );
}

#[test]
fn test_dijkstra_from_every_source() {
    let graph = sample();
    assert_eq!(
        dijkstra(&graph, 4).unwrap(),
        vec![Some(12), Some(8), Some(10), Some(3), Some(0)]
    );
    assert_eq!(
        dijkstra(&graph, 3).unwrap(),
        vec![Some(32), Some(5), Some(7), Some(0), Some(20)]
    );
}

#[test]
fn test_dijkstra_unreachable_is_none() {
    let mut graph = sample();
    graph.remove_edge(4, 3);
    // 3 and 2 are now unreachable from 0
    assert_eq!(
        dijkstra(&graph, 0).unwrap(),
        vec![Some(0), Some(10), None, None, Some(25)]
    );
}

#[test]
fn test_dijkstra_invalid_source_errors() {
    let graph = sample();
    let result = dijkstra(&graph, 5);
    match result {
        Err(GraphError::IndexOutOfRange { index: 5, count: 5 }) => {}
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_dijkstra_relaxation_invariant() {
    let graph = sample();
    let distances = dijkstra(&graph, 0).unwrap();
    for (src, dst, weight) in graph.edges() {
        if let Some(d_src) = distances[src] {
            let d_dst = distances[dst].expect("edge target reachable from reachable source");
            assert!(
                d_dst <= d_src + weight,
                "relaxation violated on edge ({}, {}, {})",
                src,
                dst,
                weight
            );
        }
    }
}

#[test]
fn test_dijkstra_prefers_cheaper_multi_hop_route() {
    // Direct 0->2 costs 10, the 0->1->2 detour costs 5
    let graph = DirectedGraph::from_edges(&[(0, 2, 10), (0, 1, 2), (1, 2, 3)]);
    assert_eq!(dijkstra(&graph, 0).unwrap(), vec![Some(0), Some(2), Some(5)]);
}
