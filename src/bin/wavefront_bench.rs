use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wavefront::{default_workers, measure, random_graph, HarnessConfig, Report};

#[derive(Parser)]
#[command(name = "wavefront-bench")]
#[command(about = "Time serial vs. parallel BFS/DFS on a random graph", long_about = None)]
struct Cli {
    /// Number of vertices
    #[arg(long, default_value_t = 5000)]
    vertices: usize,

    /// Random neighbour draws per vertex (self-loops are dropped)
    #[arg(long, default_value_t = 5)]
    degree: usize,

    /// Seed for the graph generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start vertex
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Worker threads for the parallel variants [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,

    /// Repetitions per variant
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Print the report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    info!(vertices = cli.vertices, degree = cli.degree, seed = cli.seed, "building graph");
    let graph = random_graph(cli.vertices, cli.degree, cli.seed).context("failed to build graph")?;

    let config = HarnessConfig::default()
        .with_start(cli.start)
        .with_workers(cli.workers.unwrap_or_else(default_workers))
        .with_runs(cli.runs);
    let report = measure(&graph, &config).context("measurement failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    if !report.is_consistent() {
        bail!(
            "traversals disagree: bfs {}/{}, dfs {}/{}",
            report.bfs.serial_visited,
            report.bfs.parallel_visited,
            report.dfs.serial_visited,
            report.dfs.parallel_visited
        );
    }
    Ok(())
}

fn print_table(report: &Report) {
    println!(
        "Graph: {} vertices, {} edges, start {}",
        report.vertices, report.edges, report.config.start
    );
    println!(
        "Workers: {}, runs per variant: {}",
        report.config.workers, report.config.runs
    );
    println!("Reachable: {}", report.bfs.serial_visited);
    println!();
    println!("| Strategy | Serial (µs) | Parallel (µs) | Speedup |");
    println!("|---|---|---|---|");
    for (name, t) in [("BFS", &report.bfs), ("DFS", &report.dfs)] {
        let speedup = t
            .speedup
            .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}x"));
        println!(
            "| {name} | {:.1} | {:.1} | {speedup} |",
            t.serial_us, t.parallel_us
        );
    }
}
