//! Per-query performance metrics
//!
//! One [`RunMetrics`] record is produced per query and appended to a CSV log
//! without a header row, in the column order of [`CSV_COLUMNS`]. The log can
//! be read back with [`read_csv`] and aggregated per algorithm.

mod summary;

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;

pub use summary::{longest_runs, summarize, AlgorithmSummary, Spread, Summary};

use crate::error::{Result, RouteError};
use crate::graph::{GraphStore, NodeId, PathResult};

/// Column order of a metrics row
pub const CSV_COLUMNS: [&str; 10] = [
    "timestamp",
    "algorithm",
    "source",
    "target",
    "load_time",
    "algorithm_time",
    "nodes_visited",
    "path_length",
    "graph_nodes",
    "graph_edges",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of a single shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetrics {
    pub timestamp: DateTime<Local>,
    pub algorithm: String,
    pub source: NodeId,
    pub target: NodeId,
    /// Graph load time in milliseconds
    pub load_time_ms: f64,
    /// Search time in milliseconds
    pub algorithm_time_ms: f64,
    pub nodes_visited: u64,
    /// Edges on the path, `-1` when unreachable
    pub path_length: i64,
    pub graph_nodes: usize,
    pub graph_edges: usize,
}

/// Timing and identity of a query, before its result is known
#[derive(Debug, Clone, Copy)]
pub struct QueryTiming<'a> {
    pub algorithm: &'a str,
    pub source: NodeId,
    pub target: NodeId,
    pub load_time: Duration,
    pub algorithm_time: Duration,
}

impl RunMetrics {
    /// Package a query outcome together with the graph's size at query time
    pub fn new(timing: QueryTiming<'_>, result: &PathResult, graph: &GraphStore) -> Self {
        Self {
            timestamp: Local::now(),
            algorithm: timing.algorithm.to_string(),
            source: timing.source,
            target: timing.target,
            load_time_ms: duration_ms(timing.load_time),
            algorithm_time_ms: duration_ms(timing.algorithm_time),
            nodes_visited: result.nodes_visited,
            path_length: result.path_length(),
            graph_nodes: graph.node_count(),
            graph_edges: graph.edge_count(),
        }
    }

    /// Override the capture time
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Parse one line written by [`RunMetrics::to_csv_row`]; `line` is 1-based
    pub fn from_csv_row(row: &str, line: usize) -> Result<Self> {
        let malformed = || RouteError::MalformedRecord {
            line,
            content: row.to_string(),
        };

        let fields: Vec<&str> = row.trim_end().split(',').map(str::trim).collect();
        let [timestamp, algorithm, source, target, load, algo, visited, length, nodes, edges] =
            fields[..]
        else {
            return Err(malformed());
        };

        let naive =
            NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| malformed())?;
        let timestamp = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(malformed)?;

        Ok(Self {
            timestamp,
            algorithm: algorithm.to_string(),
            source: field(source).ok_or_else(malformed)?,
            target: field(target).ok_or_else(malformed)?,
            load_time_ms: field(load).ok_or_else(malformed)?,
            algorithm_time_ms: field(algo).ok_or_else(malformed)?,
            nodes_visited: field(visited).ok_or_else(malformed)?,
            path_length: field(length).ok_or_else(malformed)?,
            graph_nodes: field(nodes).ok_or_else(malformed)?,
            graph_edges: field(edges).ok_or_else(malformed)?,
        })
    }

    /// Whether the query found a path
    pub fn succeeded(&self) -> bool {
        self.path_length >= 0
    }

    /// Render the record as one CSV line (no trailing newline)
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.3},{:.3},{},{},{},{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.algorithm,
            self.source,
            self.target,
            self.load_time_ms,
            self.algorithm_time_ms,
            self.nodes_visited,
            self.path_length,
            self.graph_nodes,
            self.graph_edges
        )
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn field<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

/// Append one metrics row to `path`, creating the file and its parents if needed
#[tracing::instrument(skip(metrics), fields(path = %path.display()))]
pub fn append_csv(path: &Path, metrics: &RunMetrics) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| RouteError::io_operation("create directory", parent.display(), e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| RouteError::io_operation("open metrics file", path.display(), e))?;
    writeln!(file, "{}", metrics.to_csv_row())
        .map_err(|e| RouteError::io_operation("append metrics to", path.display(), e))?;

    tracing::debug!("recorded run metrics");
    Ok(())
}

/// Read every row of a metrics log; a missing file is an empty log
#[tracing::instrument(fields(path = %path.display()))]
pub fn read_csv(path: &Path) -> Result<Vec<RunMetrics>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(RouteError::io_operation("open metrics file", path.display(), e)),
    };

    let mut rows = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(RunMetrics::from_csv_row(&line, index + 1)?);
    }

    tracing::debug!(rows = rows.len(), "read run metrics");
    Ok(rows)
}

/// Delete a metrics log, returning whether there was one to delete
pub fn clear_csv(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(RouteError::io_operation("remove metrics file", path.display(), e)),
    }
}
