//! Command-line front end: load a graph from flat files and query it.
//!
//! Run: cargo run --bin navgraph -- route A F
//!
//! Set `RUST_LOG=debug` (or `trace`) to see what the searches do.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use navgraph::{Graph, Route, SearchConfig, SearchError, SearchMode};
use navgraph_demos::{LoaderConfig, load_files};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "navgraph", about = "Traverse and route through a positioned graph")]
struct Cli {
    /// Node file: one `label x y` record per line
    #[arg(long, default_value = "demos/data/nodes.txt")]
    nodes: PathBuf,

    /// Arc file: one `from to weight` record per line
    #[arg(long, default_value = "demos/data/arcs.txt")]
    arcs: PathBuf,

    /// Factor applied to node coordinates on load
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Route between two labelled nodes
    Route {
        from: String,
        to: String,
        /// Open-set ordering
        #[arg(long, value_enum, default_value_t = Mode::UniformCost)]
        mode: Mode,
    },
    /// Cheapest cost between two labelled nodes
    Ucs { from: String, to: String },
    /// Depth-first order from a node
    Dfs { from: String },
    /// Breadth-first order from a node
    Bfs { from: String },
    /// Breadth-first search for a label
    Find { from: String, target: String },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    UniformCost,
    AStar,
}

impl From<Mode> for SearchMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::UniformCost => SearchMode::UniformCost,
            Mode::AStar => SearchMode::AStar,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = LoaderConfig {
        position_scale: cli.scale,
        capacity: None,
    };
    let mut graph = load_files(&cli.nodes, &cli.arcs, &cfg)?;

    match cli.command {
        Command::Route { from, to, mode } => {
            graph.set_config(SearchConfig {
                mode: mode.into(),
                ..graph.config()
            });
            let route = graph.route_by_label(&from, &to)?;
            print_route(&graph, &route, cli.json)?;
        }
        Command::Ucs { from, to } => {
            let (start, goal) = (lookup(&graph, &from)?, lookup(&graph, &to)?);
            let cost = graph.uniform_cost(start, goal)?;
            let route = Route {
                nodes: graph.path_to(goal),
                cost,
            };
            print_route(&graph, &route, cli.json)?;
        }
        Command::Dfs { from } => {
            let start = lookup(&graph, &from)?;
            graph.reset_nodes();
            let mut order = Vec::new();
            graph.depth_first(start, |n| order.push(n.data().clone()));
            print_labels(&order, cli.json)?;
        }
        Command::Bfs { from } => {
            let start = lookup(&graph, &from)?;
            graph.reset_nodes();
            let mut order = Vec::new();
            graph.breadth_first(start, |n| order.push(n.data().clone()));
            print_labels(&order, cli.json)?;
        }
        Command::Find { from, target } => {
            let start = lookup(&graph, &from)?;
            graph.reset_nodes();
            let mut back = Vec::new();
            let path = graph.breadth_first_search(start, &target, |n| back.push(n.data().clone()))?;
            log::debug!("walked back through {}", back.join(" <- "));
            print_labels(&labels(&graph, &path), cli.json)?;
        }
    }
    Ok(())
}

fn lookup(graph: &Graph<String>, label: &str) -> Result<usize, SearchError> {
    graph
        .find(&label.to_string())
        .ok_or_else(|| SearchError::UnknownLabel(label.to_string()))
}

fn labels(graph: &Graph<String>, ids: &[usize]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| graph.node(id).map(|n| n.data().clone()))
        .collect()
}

fn print_labels(order: &[String], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        println!("{}", order.join(" "));
    }
    Ok(())
}

fn print_route(graph: &Graph<String>, route: &Route, json: bool) -> serde_json::Result<()> {
    let names = labels(graph, &route.nodes);
    if json {
        let nodes: Vec<_> = graph.views().collect();
        let out = serde_json::json!({
            "path": names,
            "route": route,
            "nodes": nodes,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} (cost {})", names.join(" -> "), route.cost);
    }
    Ok(())
}
