//! wgraph CLI: load an edge-list file and query it
//!
//! Uses the wgraph library directly; every invocation loads the file afresh.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wgraph::{EdgeListLoader, GraphConfig, GraphMode, GraphStore, LoadReport, Weight};

#[derive(Parser)]
#[command(name = "wgraph", version, about = "Weighted graph engine CLI")]
struct Cli {
    /// Edge-list file: an edge count, then `from to weight` records
    #[arg(long, short, global = true, env = "WGRAPH_FILE")]
    file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Build an undirected graph (overrides the configuration)
    #[arg(long, global = true)]
    undirected: bool,

    /// Fail on self-loop or duplicate records (overrides the configuration)
    #[arg(long, global = true)]
    strict: bool,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Show graph size and load statistics
    Info,
    /// Show the outgoing edges of a vertex
    Edges {
        label: String,
    },
    /// Depth-first traversal order
    Dfs {
        start: String,
    },
    /// Breadth-first traversal order
    Bfs {
        start: String,
    },
    /// Shortest distances from a vertex
    Dijkstra {
        start: String,

        /// Only report the path to this vertex
        #[arg(long)]
        to: Option<String>,
    },
    /// Minimum spanning tree grown from a vertex
    Prim {
        start: String,
    },
    /// Minimum spanning forest of the whole graph
    Kruskal,
}

/// Tabular command result
#[derive(Serialize)]
struct Output {
    columns: Vec<&'static str>,
    records: Vec<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_weight: Option<Weight>,
}

impl Output {
    fn new(columns: Vec<&'static str>) -> Self {
        Output {
            columns,
            records: Vec::new(),
            total_weight: None,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (graph, report) = load_graph(cli)?;

    let output = match &cli.command {
        Commands::Info => run_info(&graph, &report),
        Commands::Edges { label } => run_edges(&graph, label)?,
        Commands::Dfs { start } => run_traversal(&graph, start, Walk::Depth)?,
        Commands::Bfs { start } => run_traversal(&graph, start, Walk::Breadth)?,
        Commands::Dijkstra { start, to } => run_dijkstra(&graph, start, to.as_deref())?,
        Commands::Prim { start } => run_prim(&graph, start)?,
        Commands::Kruskal => run_kruskal(&graph)?,
    };

    render(&output, &cli.format)
}

fn load_graph(cli: &Cli) -> Result<(GraphStore, LoadReport)> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if cli.undirected {
        config.mode = GraphMode::Undirected;
    }
    if cli.strict {
        config.strict_load = true;
    }

    let Some(file) = &cli.file else {
        bail!("no edge-list file given (use --file or WGRAPH_FILE)");
    };

    debug!("Effective configuration: {:?}", config);
    let mut graph = config.build();
    let report = EdgeListLoader::from_config(&config)
        .load_file(&mut graph, file)
        .with_context(|| format!("loading {}", file.display()))?;
    Ok((graph, report))
}

fn require_vertex(graph: &GraphStore, label: &str) -> Result<()> {
    if !graph.contains(label) {
        bail!("vertex '{}' not found", label);
    }
    Ok(())
}

fn run_info(graph: &GraphStore, report: &LoadReport) -> Output {
    let mut output = Output::new(vec!["metric", "value"]);
    output.records = vec![
        vec![json!("mode"), json!(graph.mode().to_string())],
        vec![json!("vertices"), json!(graph.vertices_size())],
        vec![json!("edges"), json!(graph.edges_size())],
        vec![json!("records"), json!(report.records)],
        vec![json!("skipped"), json!(report.skipped)],
    ];
    output
}

fn run_edges(graph: &GraphStore, label: &str) -> Result<Output> {
    let (Some(degree), Some(text)) = (graph.vertex_degree(label), graph.edges_as_text(label)) else {
        bail!("vertex '{}' not found", label);
    };
    let mut output = Output::new(vec!["vertex", "degree", "edges"]);
    output.records.push(vec![json!(label), json!(degree), json!(text)]);
    Ok(output)
}

#[derive(Clone, Copy)]
enum Walk {
    Depth,
    Breadth,
}

fn run_traversal(graph: &GraphStore, start: &str, walk: Walk) -> Result<Output> {
    require_vertex(graph, start)?;
    let mut output = Output::new(vec!["step", "vertex"]);
    let mut record = |label: &str| {
        let step = output.records.len() + 1;
        output.records.push(vec![json!(step), json!(label)]);
    };
    match walk {
        Walk::Depth => graph.dfs(start, &mut record),
        Walk::Breadth => graph.bfs(start, &mut record),
    }
    Ok(output)
}

fn run_dijkstra(graph: &GraphStore, start: &str, to: Option<&str>) -> Result<Output> {
    require_vertex(graph, start)?;
    let paths = graph.dijkstra(start);

    if let Some(target) = to {
        require_vertex(graph, target)?;
        let mut output = Output::new(vec!["target", "distance", "path"]);
        match paths.path_to(target) {
            Some(path) => output.records.push(vec![
                json!(target),
                json!(paths.distance(target)),
                json!(path.join(" -> ")),
            ]),
            None if target == start => {
                output.records.push(vec![json!(target), json!(0), json!(start)]);
            }
            None => bail!("'{}' is not reachable from '{}'", target, start),
        }
        return Ok(output);
    }

    let mut output = Output::new(vec!["vertex", "distance", "previous"]);
    for (label, distance) in &paths.distances {
        output.records.push(vec![
            json!(label),
            json!(distance),
            json!(paths.predecessors.get(label)),
        ]);
    }
    Ok(output)
}

fn tree_output() -> Output {
    Output::new(vec!["from", "to", "weight"])
}

fn require_undirected(graph: &GraphStore) -> Result<()> {
    if graph.is_directed() {
        bail!("spanning trees need an undirected graph (pass --undirected)");
    }
    Ok(())
}

fn run_prim(graph: &GraphStore, start: &str) -> Result<Output> {
    require_undirected(graph)?;
    require_vertex(graph, start)?;
    let mut output = tree_output();
    let total = graph.mst_prim(start, |from, to, weight| {
        output.records.push(vec![json!(from), json!(to), json!(weight)]);
    });
    output.total_weight = total;
    Ok(output)
}

fn run_kruskal(graph: &GraphStore) -> Result<Output> {
    require_undirected(graph)?;
    let mut output = tree_output();
    let total = graph.mst_kruskal(|from, to, weight| {
        output.records.push(vec![json!(from), json!(to), json!(weight)]);
    });
    let Some(total) = total else {
        bail!("the graph is empty");
    };
    output.total_weight = Some(total);
    Ok(output)
}

fn render(output: &Output, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(output)?);
        }
        OutputFormat::Csv => {
            println!("{}", output.columns.join(","));
            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                println!("{}", cells.join(","));
            }
        }
        OutputFormat::Table => {
            if output.records.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&output.columns);

            for row in &output.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", output.records.len());
            if let Some(total) = output.total_weight {
                println!("total weight: {}", total);
            }
        }
    }

    Ok(())
}

fn format_table_value(v: &Value) -> String {
    match v {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &Value) -> String {
    match v {
        Value::Null => "".to_string(),
        Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}
