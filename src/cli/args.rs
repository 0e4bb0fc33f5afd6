use clap::Args;
use std::path::PathBuf;

use wikiroute_core::config::RunConfig;

/// Arguments for the path command
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Edge-list file with one `from,to,weight` record per line
    pub graph: PathBuf,

    /// Shortest-path algorithm: dijkstra or dial
    pub algorithm: String,

    /// Source node id (or title, with --titles)
    pub source: String,

    /// Target node id (or title, with --titles)
    pub target: String,

    /// Upper bound on edge weights for the dial bucket queue
    #[arg(long)]
    pub max_weight: Option<i64>,

    /// Reject malformed edge records instead of defaulting fields to zero
    #[arg(long)]
    pub strict: bool,

    /// TSV file mapping node ids to titles (`<id>\t<title>`)
    #[arg(long)]
    pub titles: Option<PathBuf>,

    /// CSV file that receives one metrics row per run
    #[arg(long)]
    pub metrics_file: Option<PathBuf>,

    /// File that receives the rendered path
    #[arg(long)]
    pub results_file: Option<PathBuf>,

    /// Do not append to the metrics file
    #[arg(long)]
    pub no_metrics: bool,

    /// Do not write the results file
    #[arg(long)]
    pub no_results: bool,
}

impl PathArgs {
    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut RunConfig) {
        if let Some(max_weight) = self.max_weight {
            config.search.max_weight = max_weight;
        }
        if self.strict {
            config.input.strict = true;
        }
        if let Some(titles) = &self.titles {
            config.input.titles = Some(titles.clone());
        }
        if let Some(path) = &self.metrics_file {
            config.output.metrics_file = path.clone();
        }
        if let Some(path) = &self.results_file {
            config.output.results_file = path.clone();
        }
        if self.no_metrics {
            config.output.record_metrics = false;
        }
        if self.no_results {
            config.output.write_results = false;
        }
    }
}

/// Arguments for the stats command
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Edge-list file with one `from,to,weight` record per line
    pub graph: PathBuf,

    /// Reject malformed edge records instead of defaulting fields to zero
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the metrics command
#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    /// Metrics CSV to read (defaults to the configured metrics file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// TSV file mapping node ids to titles, used to label endpoints
    #[arg(long)]
    pub titles: Option<PathBuf>,

    /// Number of slowest runs to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Delete the metrics file instead of summarizing it
    #[arg(long)]
    pub clear: bool,
}
