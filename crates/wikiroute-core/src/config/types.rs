//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default caller-asserted upper bound on a single edge weight for Dial's algorithm
pub const DEFAULT_MAX_WEIGHT: i64 = 50;

/// Default cap on the number of buckets Dial's algorithm may allocate
pub const DEFAULT_BUCKET_LIMIT: usize = 1 << 24;

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Search engine settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Graph input settings
    #[serde(default)]
    pub input: InputConfig,

    /// Metrics and result output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the shortest-path strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Upper bound on any single edge weight (Dial only)
    #[serde(default = "default_max_weight")]
    pub max_weight: i64,

    /// Maximum bucket array length (Dial only)
    #[serde(default = "default_bucket_limit")]
    pub bucket_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_weight: default_max_weight(),
            bucket_limit: default_bucket_limit(),
        }
    }
}

/// Configuration for reading graph and title files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Reject malformed edge records instead of defaulting fields to zero
    #[serde(default)]
    pub strict: bool,

    /// Optional `<id>\t<title>` dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<PathBuf>,
}

/// Configuration for the metrics log and result file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Append-only CSV log with one row per query
    #[serde(default = "default_metrics_file")]
    pub metrics_file: PathBuf,

    /// Human-readable result of the latest query
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,

    /// Append a metrics row after each query
    #[serde(default = "default_true")]
    pub record_metrics: bool,

    /// Write the result file after each query
    #[serde(default = "default_true")]
    pub write_results: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            metrics_file: default_metrics_file(),
            results_file: default_results_file(),
            record_metrics: true,
            write_results: true,
        }
    }
}

fn default_max_weight() -> i64 {
    DEFAULT_MAX_WEIGHT
}

fn default_bucket_limit() -> usize {
    DEFAULT_BUCKET_LIMIT
}

fn default_metrics_file() -> PathBuf {
    PathBuf::from("performance_metrics.csv")
}

fn default_results_file() -> PathBuf {
    PathBuf::from("results").join("shortest_path.txt")
}

fn default_true() -> bool {
    true
}
