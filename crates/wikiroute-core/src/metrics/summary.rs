//! Per-algorithm aggregates over a metrics log

use std::collections::BTreeMap;

use serde::Serialize;

use super::RunMetrics;

/// Mean, median and range of one measured column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spread {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl Spread {
    /// `None` for an empty sample
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let n = values.len();
        let mid = n / 2;
        let median = if n % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };
        Some(Self {
            mean: values.iter().sum::<f64>() / n as f64,
            median,
            min: values[0],
            max: values[n - 1],
        })
    }
}

/// Aggregates for the runs of one algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: String,
    pub runs: usize,
    /// Runs that found a path
    pub successful_runs: usize,
    pub algorithm_time_ms: Spread,
    pub nodes_visited: Spread,
    /// Over successful runs only; `None` when every run missed
    pub path_length: Option<Spread>,
}

/// Whole-log totals plus one entry per algorithm, ordered by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub runs: usize,
    pub successful_runs: usize,
    pub algorithms: Vec<AlgorithmSummary>,
}

/// Group rows by algorithm and aggregate each group
pub fn summarize(rows: &[RunMetrics]) -> Summary {
    let mut groups: BTreeMap<&str, Vec<&RunMetrics>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.algorithm.as_str()).or_default().push(row);
    }

    let algorithms = groups
        .into_iter()
        .filter_map(|(algorithm, group)| {
            let successful: Vec<&RunMetrics> =
                group.iter().copied().filter(|r| r.succeeded()).collect();
            Some(AlgorithmSummary {
                algorithm: algorithm.to_string(),
                runs: group.len(),
                successful_runs: successful.len(),
                algorithm_time_ms: Spread::of(group.iter().map(|r| r.algorithm_time_ms))?,
                nodes_visited: Spread::of(group.iter().map(|r| r.nodes_visited as f64))?,
                path_length: Spread::of(successful.iter().map(|r| r.path_length as f64)),
            })
        })
        .collect();

    Summary {
        runs: rows.len(),
        successful_runs: rows.iter().filter(|r| r.succeeded()).count(),
        algorithms,
    }
}

/// The `n` slowest runs by search time, slowest first
pub fn longest_runs(rows: &[RunMetrics], n: usize) -> Vec<&RunMetrics> {
    let mut sorted: Vec<&RunMetrics> = rows.iter().collect();
    sorted.sort_by(|a, b| b.algorithm_time_ms.total_cmp(&a.algorithm_time_ms));
    sorted.truncate(n);
    sorted
}
