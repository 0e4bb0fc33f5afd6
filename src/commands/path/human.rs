use super::PathOutcome;
use crate::commands::dispatch::CommandContext;
use wikiroute_core::results;

/// Output in human-readable format
pub fn output_path_human(ctx: &CommandContext, outcome: &PathOutcome<'_>) {
    let quiet = ctx.cli.quiet;

    if !quiet {
        print_graph_summary(outcome);
    }

    print!(
        "{}",
        results::render(
            outcome.source,
            outcome.target,
            &outcome.result,
            outcome.titles
        )
    );

    if !quiet {
        println!(
            "Total execution time: {:.3} ms",
            ctx.start.elapsed().as_secs_f64() * 1000.0
        );
    }
}

fn print_graph_summary(outcome: &PathOutcome<'_>) {
    let graph = outcome.graph;
    println!("Graph loaded with {} nodes.", graph.node_count());
    println!("Total edges: {}", graph.edge_count());

    if graph.contains(outcome.source) {
        println!(
            "Source node {} has {} neighbors.",
            outcome.source,
            graph.neighbors(outcome.source).len()
        );
    } else {
        println!("Source node {} not found in graph.", outcome.source);
    }

    if graph.contains(outcome.target) {
        println!("Target node {} is in graph.", outcome.target);
    } else {
        println!("Target node {} not found in graph.", outcome.target);
    }
}
