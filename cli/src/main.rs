//! labelgraph CLI: load an edge-list file and query it
//!
//! ```text
//! labelgraph-cli graph.txt dfs A
//! labelgraph-cli graph.txt --format table shortest A
//! ```

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use labelgraph::{Graph, LoadConfig, ShortestPaths};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "labelgraph", version, about = "Query a weighted digraph loaded from an edge list")]
struct Cli {
    /// Edge-list file
    #[arg(env = "LABELGRAPH_FILE")]
    file: PathBuf,

    /// Fail on unreadable or damaged input instead of loading what is there
    #[arg(long, global = true)]
    strict: bool,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log loader and algorithm details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts
    Stats,
    /// Depth-first traversal order
    Dfs {
        /// Start vertex label
        start: String,
    },
    /// Breadth-first traversal order
    Bfs {
        /// Start vertex label
        start: String,
    },
    /// Lowest cost to every reachable vertex
    Shortest {
        /// Start vertex label
        start: String,
    },
    /// Cheapest path between two vertices
    Path {
        /// Start vertex label
        start: String,
        /// Target vertex label
        target: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = if cli.strict { LoadConfig::strict() } else { LoadConfig::default() };
    let mut graph = Graph::new();
    graph
        .load_file(&cli.file, &config)
        .with_context(|| format!("loading {}", cli.file.display()))?;

    let output = match &cli.command {
        Commands::Stats => render_stats(&graph, cli.format)?,
        Commands::Dfs { start } => {
            let mut order = Vec::new();
            graph.depth_first_traversal(start, |label| order.push(label.to_string()))?;
            render_order(&order, cli.format)?
        }
        Commands::Bfs { start } => {
            let mut order = Vec::new();
            graph.breadth_first_traversal(start, |label| order.push(label.to_string()))?;
            render_order(&order, cli.format)?
        }
        Commands::Shortest { start } => {
            let paths = graph.dijkstra_cost_to_all_vertices(start)?;
            render_shortest(&paths, cli.format)?
        }
        Commands::Path { start, target } => {
            let paths = graph.dijkstra_cost_to_all_vertices(start)?;
            render_path(&paths, target, cli.format)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn render_stats(graph: &Graph, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "vertices": graph.num_vertices(),
            "edges": graph.num_edges(),
        }))?,
        OutputFormat::Text => format!("Vertices: {}\nEdges:    {}", graph.num_vertices(), graph.num_edges()),
        OutputFormat::Table => {
            let mut table = new_table(&["Vertex", "Out-degree", "Neighbors"]);
            for vertex in graph.vertices() {
                let neighbors: Vec<String> = vertex
                    .neighbors()
                    .map(|edge| format!("{}({})", edge.end_vertex(), edge.weight()))
                    .collect();
                table.add_row(vec![
                    vertex.label().to_string(),
                    vertex.number_of_neighbors().to_string(),
                    neighbors.join(" "),
                ]);
            }
            format!("{}\n{} vertices, {} edges", table, graph.num_vertices(), graph.num_edges())
        }
    })
}

fn render_order(order: &[String], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(order)?,
        OutputFormat::Text => order.join(" "),
        OutputFormat::Table => {
            let mut table = new_table(&["#", "Vertex"]);
            for (idx, label) in order.iter().enumerate() {
                table.add_row(vec![(idx + 1).to_string(), label.clone()]);
            }
            table.to_string()
        }
    })
}

fn render_shortest(paths: &ShortestPaths, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(paths)?,
        OutputFormat::Text => paths.to_string(),
        OutputFormat::Table => {
            if paths.is_empty() {
                return Ok(format!("(nothing reachable from {})", paths.source()));
            }
            let mut table = new_table(&["Vertex", "Cost", "Path"]);
            for (label, cost) in paths.costs() {
                let path = paths.path_to(label).unwrap_or_default();
                table.add_row(vec![label.clone(), cost.to_string(), path.join(" -> ")]);
            }
            table.to_string()
        }
    })
}

fn render_path(paths: &ShortestPaths, target: &str, format: OutputFormat) -> anyhow::Result<String> {
    let path = paths
        .path_to(target)
        .ok_or_else(|| anyhow!("{} is not reachable from {}", target, paths.source()))?;
    let cost = paths.cost(target).unwrap_or(0);

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "path": path,
            "cost": cost,
        }))?,
        OutputFormat::Text => format!("{} (cost {})", path.join(" -> "), cost),
        OutputFormat::Table => {
            let mut table = new_table(&["Step", "Vertex", "Cost so far"]);
            for (idx, label) in path.iter().enumerate() {
                let so_far = paths.cost(label).unwrap_or(0);
                table.add_row(vec![idx.to_string(), label.clone(), so_far.to_string()]);
            }
            table.to_string()
        }
    })
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}
