//! Timing harness: serial vs. parallel BFS and DFS over one graph.
//!
//! Each variant runs `runs` times back to back; every run allocates its own
//! visited state, so repetitions never contaminate each other. Reported times
//! are per-run averages in microseconds.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{default_workers, Mode};
use crate::error::{Result, TraversalError};
use crate::graph::Graph;
use crate::VertexId;

/// Parameters of one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    /// Start vertex of every traversal.
    pub start: VertexId,
    /// Workers for the parallel variants.
    pub workers: usize,
    /// Repetitions per variant.
    pub runs: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            start: 0,
            workers: default_workers(),
            runs: 10,
        }
    }
}

impl HarnessConfig {
    /// Sets the start vertex.
    #[must_use]
    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = start;
        self
    }

    /// Sets the parallel worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the repetitions per variant.
    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }
}

/// Serial vs. parallel timing of one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    /// Mean serial run time, microseconds.
    pub serial_us: f64,
    /// Mean parallel run time, microseconds.
    pub parallel_us: f64,
    /// Vertices reached by the serial variant.
    pub serial_visited: usize,
    /// Vertices reached by the parallel variant.
    pub parallel_visited: usize,
    /// `serial_us / parallel_us`; `None` when the parallel time rounds to zero.
    pub speedup: Option<f64>,
}

impl Timing {
    /// Builds a timing and derives its speedup.
    pub fn new(serial_us: f64, parallel_us: f64, serial_visited: usize, parallel_visited: usize) -> Self {
        Self {
            serial_us,
            parallel_us,
            serial_visited,
            parallel_visited,
            speedup: (parallel_us > 0.0).then(|| serial_us / parallel_us),
        }
    }
}

/// Outcome of [`measure`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Vertices in the graph.
    pub vertices: usize,
    /// Undirected edges in the graph.
    pub edges: usize,
    /// The measurement parameters.
    pub config: HarnessConfig,
    /// Breadth-first timings.
    pub bfs: Timing,
    /// Depth-first timings.
    pub dfs: Timing,
}

impl Report {
    /// `true` when all four variants reached the same number of vertices.
    pub fn is_consistent(&self) -> bool {
        let n = self.bfs.serial_visited;
        [self.bfs.parallel_visited, self.dfs.serial_visited, self.dfs.parallel_visited]
            .iter()
            .all(|&c| c == n)
    }
}

/// Times serial and parallel BFS and DFS on `graph`.
///
/// # Errors
/// - [`TraversalError::InvalidInput`] if `runs` or `workers` is zero
/// - [`TraversalError::InvalidVertex`] if `start` is out of range
pub fn measure(graph: &Graph, config: &HarnessConfig) -> Result<Report> {
    if config.runs == 0 {
        return Err(TraversalError::invalid_input("run count must be positive"));
    }
    if config.workers == 0 {
        return Err(TraversalError::invalid_input("worker count must be positive"));
    }
    graph.check(config.start)?;

    let bfs = time_pair(config, |mode| graph.traverse_bfs(config.start, mode, config.workers))?;
    let dfs = time_pair(config, |mode| graph.traverse_dfs(config.start, mode, config.workers))?;

    let report = Report {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        config: *config,
        bfs,
        dfs,
    };
    tracing::info!(
        bfs_serial_us = report.bfs.serial_us,
        bfs_parallel_us = report.bfs.parallel_us,
        dfs_serial_us = report.dfs.serial_us,
        dfs_parallel_us = report.dfs.parallel_us,
        consistent = report.is_consistent(),
        "measurement finished"
    );
    Ok(report)
}

fn time_pair(config: &HarnessConfig, run: impl Fn(Mode) -> Result<usize>) -> Result<Timing> {
    let (serial_us, serial_visited) = time_runs(config.runs, || run(Mode::Serial))?;
    let (parallel_us, parallel_visited) = time_runs(config.runs, || run(Mode::Parallel))?;
    Ok(Timing::new(serial_us, parallel_us, serial_visited, parallel_visited))
}

/// Mean microseconds over `runs` calls, plus the visited count of the last call.
#[allow(clippy::cast_precision_loss)]
fn time_runs(runs: usize, mut f: impl FnMut() -> Result<usize>) -> Result<(f64, usize)> {
    let mut total = Duration::ZERO;
    let mut visited = 0;
    for _ in 0..runs {
        let t0 = Instant::now();
        visited = f()?;
        total += t0.elapsed();
    }
    Ok((total.as_secs_f64() * 1e6 / runs as f64, visited))
}
