use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dagsort::graph::{self, Edge, Graph, Representation};
use dagsort::report::{ReportFormat, SortReport};

/// The sample DAG run by `dagsort demo`.
const DEMO_VERTICES: usize = 9;
const DEMO_EDGES: [(usize, usize); 10] = [
    (0, 1),
    (1, 2),
    (2, 7),
    (2, 4),
    (2, 3),
    (1, 5),
    (5, 6),
    (3, 6),
    (3, 4),
    (6, 8),
];

#[derive(Parser)]
#[command(name = "dagsort")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Topological sorting over dense and sparse in-memory graphs", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphArgs {
    /// Number of vertices (ids are 0..N)
    #[arg(short = 'n', long)]
    vertices: usize,

    /// Edge as SOURCE:TARGET or SOURCE:TARGET:WEIGHT (repeatable)
    #[arg(short, long = "edge", value_name = "U:V[:W]")]
    edges: Vec<Edge>,

    /// Backing store: dense (matrix) or sparse (set)
    #[arg(short, long, default_value = "dense")]
    repr: Representation,

    /// Mirror every edge in both directions
    #[arg(long)]
    undirected: bool,
}

impl GraphArgs {
    fn build(&self) -> Result<Box<dyn Graph>> {
        let mut graph = self.repr.build(self.vertices, !self.undirected);
        for edge in &self.edges {
            graph
                .add_edge(edge.source, edge.target, edge.weight)
                .with_context(|| format!("Failed to add edge {}", edge))?;
        }
        Ok(graph)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a topological order of the graph
    Sort {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },
    /// Print adjacency, indegree and edge weights of every vertex
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Sort the built-in 9-vertex sample DAG
    Demo {
        /// Backing store: dense (matrix) or sparse (set)
        #[arg(short, long, default_value = "dense")]
        repr: Representation,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Sort { graph, format } => {
            let built = graph.build()?;
            report(graph.repr, built.as_ref(), *format)
        }
        Commands::Show { graph } => {
            let built = graph.build()?;
            show(built.as_ref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Demo { repr, format } => {
            let mut built = repr.build(DEMO_VERTICES, true);
            for (u, v) in DEMO_EDGES {
                built.add_unweighted_edge(u, v)?;
            }
            report(*repr, built.as_ref(), *format)
        }
    }
}

fn report(repr: Representation, graph: &dyn Graph, format: ReportFormat) -> Result<ExitCode> {
    let report = SortReport::run(repr, graph)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report
        .write(format, &mut handle)
        .context("Failed to write report")?;

    Ok(if report.is_sorted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn show(graph: &dyn Graph) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for v in graph.vertices() {
        writeln!(out, "Adjacent to {}: {:?}", v, graph.get_adjacent_vertices(v)?)?;
    }
    for v in graph.vertices() {
        writeln!(out, "Indegree {}: {}", v, graph.get_indegree(v)?)?;
    }
    for edge in graph::edges(graph) {
        writeln!(
            out,
            "Edge weight {} -> {}: {}",
            edge.source, edge.target, edge.weight
        )?;
    }
    graph::write_edges(graph, &mut out)?;
    Ok(())
}
