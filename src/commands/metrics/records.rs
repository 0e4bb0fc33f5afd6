use super::MetricsReport;
use wikiroute_core::metrics::Spread;

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v))
}

/// Output in records format
pub fn output_metrics_records(report: &MetricsReport<'_>) {
    let summary = &report.summary;
    println!(
        "H wikiroute=1 records=1 mode=metrics runs={} successful={}",
        summary.runs, summary.successful_runs
    );

    for algo in &summary.algorithms {
        let time = &algo.algorithm_time_ms;
        let length = algo.path_length.as_ref();
        println!(
            "A {} runs={} successful={} time_mean={:.3} time_median={:.3} time_min={:.3} time_max={:.3} visited_mean={:.3} visited_median={:.3} length_mean={} length_median={}",
            algo.algorithm,
            algo.runs,
            algo.successful_runs,
            time.mean,
            time.median,
            time.min,
            time.max,
            algo.nodes_visited.mean,
            algo.nodes_visited.median,
            fmt_opt(length.map(|s: &Spread| s.mean)),
            fmt_opt(length.map(|s: &Spread| s.median))
        );
    }

    for run in &report.longest {
        println!(
            "R {} {} {} {} time={:.3} visited={} length={}",
            run.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            run.algorithm,
            run.source,
            run.target,
            run.algorithm_time_ms,
            run.nodes_visited,
            run.path_length
        );
    }
}
