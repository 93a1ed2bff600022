//! Traversal configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraversalError};

/// Execution mode of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single-threaded reference implementation.
    Serial,
    /// Fixed-size pool of scoped worker threads.
    #[default]
    Parallel,
}

/// Number of workers used when none is given: the machine's available parallelism.
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

/// Configuration for a single traversal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Serial or parallel execution.
    pub mode: Mode,
    /// Worker threads for [`Mode::Parallel`]. Ignored (but still validated) for
    /// [`Mode::Serial`].
    pub workers: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Parallel,
            workers: default_workers(),
        }
    }
}

impl TraversalConfig {
    /// Creates a configuration with the given mode and worker count.
    pub fn new(mode: Mode, workers: usize) -> Self {
        Self { mode, workers }
    }

    /// Serial configuration.
    pub fn serial() -> Self {
        Self::new(Mode::Serial, 1)
    }

    /// Parallel configuration with `workers` threads.
    pub fn parallel(workers: usize) -> Self {
        Self::new(Mode::Parallel, workers)
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(TraversalError::invalid_input("worker count must be positive"));
        }
        Ok(())
    }
}
