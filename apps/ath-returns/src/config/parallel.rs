//! Configuration for parallel row evaluation.

use serde::{Deserialize, Serialize};

/// Configuration for parallel row evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of threads to use (0 = rayon's global pool).
    #[serde(default)]
    pub max_threads: usize,

    /// Minimum row count before rows are evaluated in parallel.
    #[serde(default = "default_min_parallel_rows")]
    pub min_parallel_rows: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            min_parallel_rows: default_min_parallel_rows(),
        }
    }
}

const fn default_min_parallel_rows() -> usize {
    4096
}
