//! Path command: load a graph, run one query, record metrics and results

mod human;
mod json;
mod records;

use std::time::Instant;

use tracing::debug;
use wikiroute_core::config::RunConfig;
use wikiroute_core::error::Result;
use wikiroute_core::graph::{Algorithm, GraphStore, NodeId, PathResult};
use wikiroute_core::metrics::{self, QueryTiming, RunMetrics};
use wikiroute_core::results;
use wikiroute_core::titles::{resolve_node, TitleMap};

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;

/// Everything the output formatters need about a finished query
pub struct PathOutcome<'a> {
    pub algorithm: Algorithm,
    pub source: NodeId,
    pub target: NodeId,
    pub result: PathResult,
    pub metrics: RunMetrics,
    pub graph: &'a GraphStore,
    pub titles: Option<&'a TitleMap>,
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    args.apply_overrides(&mut config);

    let titles = config
        .input
        .titles
        .as_deref()
        .map(TitleMap::open)
        .transpose()?;
    let source = resolve_node(&args.source, titles.as_ref())?;
    let target = resolve_node(&args.target, titles.as_ref())?;
    let algorithm = Algorithm::from_name(&args.algorithm, &config.search)?;

    let load_start = Instant::now();
    let graph = GraphStore::open(&args.graph, config.input.strict)?;
    let load_time = load_start.elapsed();
    debug!(
        elapsed = ?ctx.start.elapsed(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );

    let algo_start = Instant::now();
    let result = algorithm.find_path(&graph, source, target)?;
    let algorithm_time = algo_start.elapsed();
    debug!(elapsed = ?ctx.start.elapsed(), algorithm = %algorithm, "find_path");

    let timing = QueryTiming {
        algorithm: algorithm.name(),
        source,
        target,
        load_time,
        algorithm_time,
    };
    let outcome = PathOutcome {
        metrics: RunMetrics::new(timing, &result, &graph),
        algorithm,
        source,
        target,
        result,
        graph: &graph,
        titles: titles.as_ref(),
    };

    persist(&config, &outcome)?;

    match ctx.cli.format {
        OutputFormat::Human => human::output_path_human(ctx, &outcome),
        OutputFormat::Json => json::output_path_json(&outcome)?,
        OutputFormat::Records => records::output_path_records(&outcome),
    }

    Ok(())
}

/// Append the metrics row and write the result file, as configured
fn persist(config: &RunConfig, outcome: &PathOutcome<'_>) -> Result<()> {
    if config.output.record_metrics {
        metrics::append_csv(&config.output.metrics_file, &outcome.metrics)?;
    }
    if config.output.write_results {
        let text = results::render(
            outcome.source,
            outcome.target,
            &outcome.result,
            outcome.titles,
        );
        results::write_result(&config.output.results_file, &text)?;
    }
    Ok(())
}
