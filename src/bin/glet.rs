//! CLI entry point for the `glet` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphlet::cli::commands;
use graphlet::types::GraphError;

#[derive(Parser)]
#[command(
    name = "glet",
    about = "Graphlet CLI — classic graph algorithms over edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the graph in human-readable form
    Show {
        /// Edge list: "0,1,10; 4,0,12" (directed) or "A,B; B,C" (undirected)
        edges: String,
        /// Treat the edge list as a directed weighted graph
        #[arg(long)]
        directed: bool,
    },
    /// Depth-first search from a start vertex
    Dfs {
        /// Edge list describing the graph
        edges: String,
        /// Start vertex (index when --directed, label otherwise)
        start: String,
        /// Stop the search as soon as this vertex is reached
        #[arg(long)]
        end: Option<String>,
        /// Treat the edge list as a directed weighted graph
        #[arg(long)]
        directed: bool,
    },
    /// Breadth-first search from a start vertex
    Bfs {
        /// Edge list describing the graph
        edges: String,
        /// Start vertex (index when --directed, label otherwise)
        start: String,
        /// Stop the search as soon as this vertex is reached
        #[arg(long)]
        end: Option<String>,
        /// Treat the edge list as a directed weighted graph
        #[arg(long)]
        directed: bool,
    },
    /// Check whether the graph contains a cycle
    Cycle {
        /// Edge list describing the graph
        edges: String,
        /// Treat the edge list as a directed weighted graph
        #[arg(long)]
        directed: bool,
    },
    /// Count connected components (undirected graphs)
    Components {
        /// Edge list describing the graph
        edges: String,
    },
    /// Single-source shortest paths via Dijkstra (directed graphs)
    Shortest {
        /// Edge list describing the graph
        edges: String,
        /// Source vertex index
        src: String,
    },
    /// Check whether a vertex sequence is a valid path
    Path {
        /// Edge list describing the graph
        edges: String,
        /// Vertex sequence to check
        path: Vec<String>,
        /// Treat the edge list as a directed weighted graph
        #[arg(long)]
        directed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Show { edges, directed } => commands::cmd_show(&edges, directed, json),
        Commands::Dfs {
            edges,
            start,
            end,
            directed,
        } => commands::cmd_dfs(&edges, &start, end.as_deref(), directed, json),
        Commands::Bfs {
            edges,
            start,
            end,
            directed,
        } => commands::cmd_bfs(&edges, &start, end.as_deref(), directed, json),
        Commands::Cycle { edges, directed } => commands::cmd_cycle(&edges, directed, json),
        Commands::Components { edges } => commands::cmd_components(&edges, json),
        Commands::Shortest { edges, src } => commands::cmd_shortest(&edges, &src, json),
        Commands::Path {
            edges,
            path,
            directed,
        } => commands::cmd_path(&edges, &path, directed, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Parse(_) | GraphError::InvalidWeight(_) => 2,
            GraphError::IndexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
