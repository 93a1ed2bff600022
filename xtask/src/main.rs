use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "wavefront workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion traversal benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
    /// Run wavefront-bench across worker counts and write a markdown summary
    Sweep {
        /// Number of vertices
        #[arg(long, default_value_t = 100_000)]
        vertices: usize,

        /// Comma-separated worker counts
        #[arg(long, value_delimiter = ',', default_value = "1,2,4,8")]
        workers: Vec<usize>,

        /// Repetitions per variant
        #[arg(long, default_value_t = 10)]
        runs: usize,

        /// Generator seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Deserialize)]
struct Timing {
    serial_us: f64,
    parallel_us: f64,
    parallel_visited: usize,
    speedup: Option<f64>,
}

#[derive(Deserialize)]
struct Report {
    vertices: usize,
    edges: usize,
    bfs: Timing,
    dfs: Timing,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick } => run_benchmarks(quick)?,
        Commands::Sweep {
            vertices,
            workers,
            runs,
            seed,
        } => run_sweep(vertices, &workers, runs, seed)?,
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running traversal benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg("traversal_benchmark");

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.5");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmarks failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn run_sweep(vertices: usize, workers: &[usize], runs: usize, seed: u64) -> Result<()> {
    println!("Compiling wavefront-bench...");
    let status = Command::new("cargo")
        .args(["build", "--release", "--bin", "wavefront-bench"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile wavefront-bench");
    }

    let mut rows = Vec::with_capacity(workers.len());
    for &w in workers {
        println!(">>> {w} worker(s)");
        let output = Command::new("target/release/wavefront-bench")
            .args([
                "--json".to_string(),
                format!("--vertices={vertices}"),
                format!("--workers={w}"),
                format!("--runs={runs}"),
                format!("--seed={seed}"),
            ])
            .output()
            .context("Failed to run wavefront-bench")?;
        if !output.status.success() {
            anyhow::bail!(
                "wavefront-bench failed for {w} workers: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        let report: Report = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("Unparseable report for {w} workers"))?;
        rows.push((w, report));
    }

    let report_path = Path::new("benchmark_results/sweep.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Traversal Sweep")?;
    if let Some((_, first)) = rows.first() {
        writeln!(
            file,
            "\n{} vertices, {} edges, {} runs per variant, seed {}\n",
            first.vertices, first.edges, runs, seed
        )?;
    }
    writeln!(
        file,
        "| Workers | Reached | BFS serial (µs) | BFS parallel (µs) | BFS speedup | DFS serial (µs) | DFS parallel (µs) | DFS speedup |"
    )?;
    writeln!(file, "|---|---|---|---|---|---|---|---|")?;
    for (w, r) in &rows {
        writeln!(
            file,
            "| {} | {} | {:.1} | {:.1} | {} | {:.1} | {:.1} | {} |",
            w,
            r.bfs.parallel_visited,
            r.bfs.serial_us,
            r.bfs.parallel_us,
            fmt_speedup(r.bfs.speedup),
            r.dfs.serial_us,
            r.dfs.parallel_us,
            fmt_speedup(r.dfs.speedup),
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn fmt_speedup(s: Option<f64>) -> String {
    s.map_or_else(|| "-".to_string(), |s| format!("**{s:.2}x**"))
}
