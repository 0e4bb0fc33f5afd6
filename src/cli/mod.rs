//! CLI argument parsing for wikiroute
//!
//! Supports global flags: --config, --format, --quiet, --verbose

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MetricsArgs, PathArgs, StatsArgs};
pub use output::OutputFormat;

/// WikiRoute - shortest paths over weighted edge-list graphs
#[derive(Parser, Debug)]
#[command(name = "wikiroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./wikiroute.toml when present)
    #[arg(long, global = true, env = "WIKIROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "wikiroute_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes
    #[command(allow_negative_numbers = true)]
    Path(PathArgs),

    /// Show node, edge and weight statistics for a graph
    Stats(StatsArgs),

    /// Summarize or clear the per-run metrics log
    Metrics(MetricsArgs),
}
