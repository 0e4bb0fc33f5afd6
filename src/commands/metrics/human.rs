use super::MetricsReport;
use crate::commands::dispatch::CommandContext;
use wikiroute_core::graph::NodeId;
use wikiroute_core::metrics::Spread;

/// Output in human-readable format
pub fn output_metrics_human(ctx: &CommandContext, report: &MetricsReport<'_>) {
    let summary = &report.summary;
    if summary.runs == 0 {
        println!(
            "No performance metrics collected yet in {}.",
            report.file.display()
        );
        return;
    }

    if !ctx.cli.quiet {
        println!("Metrics file: {}", report.file.display());
    }
    println!(
        "Runs: {} ({} found a path)",
        summary.runs, summary.successful_runs
    );

    println!();
    println!("Algorithm performance:");
    for algo in &summary.algorithms {
        println!(
            "  {} ({} runs, {} found a path)",
            algo.algorithm, algo.runs, algo.successful_runs
        );
        println!("    time ms:       {}", spread_line(&algo.algorithm_time_ms));
        println!(
            "    nodes visited: mean {:.1}, median {:.1}",
            algo.nodes_visited.mean, algo.nodes_visited.median
        );
        match &algo.path_length {
            Some(length) => println!(
                "    path length:   mean {:.1}, median {:.1}",
                length.mean, length.median
            ),
            None => println!("    path length:   -"),
        }
    }

    if report.longest.is_empty() {
        return;
    }
    println!();
    println!("Longest executions:");
    for run in &report.longest {
        println!(
            "  {}  {:<8} {} -> {}  {:.3} ms, {} visited, length {}",
            run.timestamp.format("%Y-%m-%d %H:%M:%S"),
            run.algorithm,
            label(report, run.source),
            label(report, run.target),
            run.algorithm_time_ms,
            run.nodes_visited,
            run.path_length
        );
    }
}

fn spread_line(spread: &Spread) -> String {
    format!(
        "mean {:.3}, median {:.3}, min {:.3}, max {:.3}",
        spread.mean, spread.median, spread.min, spread.max
    )
}

fn label(report: &MetricsReport<'_>, node: NodeId) -> String {
    match report.titles {
        Some(titles) => titles.label(node),
        None => node.to_string(),
    }
}
