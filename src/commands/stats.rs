//! Stats command: report the size of an edge-list graph

use std::time::Instant;

use wikiroute_core::error::Result;
use wikiroute_core::graph::GraphStore;

use crate::cli::{OutputFormat, StatsArgs};
use crate::commands::dispatch::CommandContext;

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let strict = args.strict || ctx.config.input.strict;

    let load_start = Instant::now();
    let graph = GraphStore::open(&args.graph, strict)?;
    let load_time_ms = load_start.elapsed().as_secs_f64() * 1000.0;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "load_graph");

    let bounds = graph.weight_bounds();

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("Graph loaded with {} nodes.", graph.node_count());
            println!("Total edges: {}", graph.edge_count());
            if let Some((lo, hi)) = bounds {
                println!("Edge weights: {}..={}", lo, hi);
            }
            if !ctx.cli.quiet {
                println!("Load time: {:.3} ms", load_time_ms);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "min_weight": bounds.map(|(lo, _)| lo),
                "max_weight": bounds.map(|(_, hi)| hi),
                "load_time_ms": load_time_ms,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            let fmt_bound = |b: Option<i64>| b.map_or_else(|| "-".to_string(), |v| v.to_string());
            println!(
                "H wikiroute=1 records=1 mode=stats nodes={} edges={} min_weight={} max_weight={}",
                graph.node_count(),
                graph.edge_count(),
                fmt_bound(bounds.map(|(lo, _)| lo)),
                fmt_bound(bounds.map(|(_, hi)| hi))
            );
        }
    }

    Ok(())
}
