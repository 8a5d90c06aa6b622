//! CLI command implementations.
//!
//! Graphs arrive as edge-list strings: `"0,1,10; 4,0,12"` for the
//! directed weighted graph (weight defaults to 1 when omitted) and
//! `"A,B; B,C"` for the undirected graph. Every command prints either
//! plain text or, with `--format json`, a serialized report.

use log::debug;
use serde::Serialize;

use crate::directed::{self, DirectedGraph};
use crate::types::{GraphError, GraphResult, VertexId, Weight};
use crate::undirected::{self, UndirectedGraph};

/// JSON payload for traversal commands.
#[derive(Serialize)]
struct TraversalReport {
    algorithm: &'static str,
    start: String,
    end: Option<String>,
    visited: Vec<String>,
}

/// Parse a directed edge list of the form `"0,1,10; 4,0,12"`.
///
/// The weight field is optional and defaults to 1. Zero and negative
/// weights are rejected here rather than silently dropped, so a typo is
/// visible instead of producing a thinner graph.
pub fn parse_directed_edges(text: &str) -> GraphResult<Vec<(VertexId, VertexId, Weight)>> {
    let mut edges = Vec::new();
    for part in text.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let fields: Vec<&str> = part.split(',').map(str::trim).collect();
        let (src, dst, weight) = match fields.as_slice() {
            [src, dst] => (*src, *dst, "1"),
            [src, dst, weight] => (*src, *dst, *weight),
            _ => {
                return Err(GraphError::Parse(format!(
                    "expected `src,dst[,weight]`, got `{}`",
                    part
                )))
            }
        };
        let src: VertexId = src
            .parse()
            .map_err(|_| GraphError::Parse(format!("bad vertex index `{}`", src)))?;
        let dst: VertexId = dst
            .parse()
            .map_err(|_| GraphError::Parse(format!("bad vertex index `{}`", dst)))?;
        let weight: i64 = weight
            .parse()
            .map_err(|_| GraphError::Parse(format!("bad edge weight `{}`", weight)))?;
        if weight <= 0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        edges.push((src, dst, weight as Weight));
    }
    debug!("parsed {} directed edges", edges.len());
    Ok(edges)
}

/// Parse an undirected edge list of the form `"A,B; B,C"`.
pub fn parse_undirected_edges(text: &str) -> GraphResult<Vec<(String, String)>> {
    let mut edges = Vec::new();
    for part in text.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let fields: Vec<&str> = part.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [u, v] => edges.push((u.to_string(), v.to_string())),
            _ => {
                return Err(GraphError::Parse(format!(
                    "expected `u,v`, got `{}`",
                    part
                )))
            }
        }
    }
    debug!("parsed {} undirected edges", edges.len());
    Ok(edges)
}

fn build_directed(edges: &str) -> GraphResult<DirectedGraph> {
    Ok(DirectedGraph::from_edges(&parse_directed_edges(edges)?))
}

fn build_undirected(edges: &str) -> GraphResult<UndirectedGraph> {
    Ok(UndirectedGraph::from_edges(parse_undirected_edges(edges)?))
}

fn parse_index(text: &str) -> GraphResult<VertexId> {
    text.parse()
        .map_err(|_| GraphError::Parse(format!("bad vertex index `{}`", text)))
}

/// Print the graph in human-readable form, or enumerate it as JSON.
pub fn cmd_show(edges: &str, directed: bool, json: bool) -> GraphResult<()> {
    if directed {
        let graph = build_directed(edges)?;
        if json {
            let payload = serde_json::json!({
                "directed": true,
                "vertices": graph.vertices(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        } else {
            print!("{}", graph);
        }
    } else {
        let graph = build_undirected(edges)?;
        if json {
            let payload = serde_json::json!({
                "directed": false,
                "vertices": graph.vertices(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        } else {
            println!("{}", graph);
        }
    }
    Ok(())
}

/// Run a DFS from `start` and print the visit order.
pub fn cmd_dfs(
    edges: &str,
    start: &str,
    end: Option<&str>,
    directed: bool,
    json: bool,
) -> GraphResult<()> {
    let visited = if directed {
        let graph = build_directed(edges)?;
        let start = parse_index(start)?;
        let end = end.map(parse_index).transpose()?;
        directed::dfs(&graph, start, end)
            .into_iter()
            .map(|v| v.to_string())
            .collect()
    } else {
        let graph = build_undirected(edges)?;
        undirected::dfs(&graph, start, end)
    };
    print_traversal("dfs", start, end, visited, json);
    Ok(())
}

/// Run a BFS from `start` and print the visit order.
pub fn cmd_bfs(
    edges: &str,
    start: &str,
    end: Option<&str>,
    directed: bool,
    json: bool,
) -> GraphResult<()> {
    let visited = if directed {
        let graph = build_directed(edges)?;
        let start = parse_index(start)?;
        let end = end.map(parse_index).transpose()?;
        directed::bfs(&graph, start, end)
            .into_iter()
            .map(|v| v.to_string())
            .collect()
    } else {
        let graph = build_undirected(edges)?;
        undirected::bfs(&graph, start, end)
    };
    print_traversal("bfs", start, end, visited, json);
    Ok(())
}

fn print_traversal(
    algorithm: &'static str,
    start: &str,
    end: Option<&str>,
    visited: Vec<String>,
    json: bool,
) {
    if json {
        let report = TraversalReport {
            algorithm,
            start: start.to_string(),
            end: end.map(str::to_string),
            visited,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
    } else if visited.is_empty() {
        println!("(no vertices visited)");
    } else {
        println!("{}", visited.join(" -> "));
    }
}

/// Report whether the graph contains a cycle.
pub fn cmd_cycle(edges: &str, directed: bool, json: bool) -> GraphResult<()> {
    let cyclic = if directed {
        directed::has_cycle(&build_directed(edges)?)
    } else {
        undirected::has_cycle(&build_undirected(edges)?)
    };
    if json {
        println!("{}", serde_json::json!({ "has_cycle": cyclic }));
    } else {
        println!("{}", if cyclic { "cycle found" } else { "no cycle" });
    }
    Ok(())
}

/// Count connected components of an undirected graph.
pub fn cmd_components(edges: &str, json: bool) -> GraphResult<()> {
    let graph = build_undirected(edges)?;
    let count = undirected::count_connected_components(&graph);
    if json {
        println!("{}", serde_json::json!({ "components": count }));
    } else {
        println!("{} connected component(s)", count);
    }
    Ok(())
}

/// Single-source shortest paths of a directed graph.
pub fn cmd_shortest(edges: &str, src: &str, json: bool) -> GraphResult<()> {
    let graph = build_directed(edges)?;
    let src = parse_index(src)?;
    let distances = directed::dijkstra(&graph, src)?;
    if json {
        let payload = serde_json::json!({ "source": src, "distances": distances });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        for (vertex, distance) in distances.iter().enumerate() {
            match distance {
                Some(d) => println!("{:4} {}", vertex, d),
                None => println!("{:4} inf", vertex),
            }
        }
    }
    Ok(())
}

/// Check whether a vertex sequence is a valid path in the graph.
pub fn cmd_path(edges: &str, path: &[String], directed: bool, json: bool) -> GraphResult<()> {
    let valid = if directed {
        let graph = build_directed(edges)?;
        let path: Vec<VertexId> = path
            .iter()
            .map(|v| parse_index(v))
            .collect::<GraphResult<_>>()?;
        graph.is_valid_path(&path)
    } else {
        let graph = build_undirected(edges)?;
        graph.is_valid_path(path)
    };
    if json {
        println!("{}", serde_json::json!({ "valid": valid }));
    } else {
        println!("{}", if valid { "valid path" } else { "not a path" });
    }
    Ok(())
}
