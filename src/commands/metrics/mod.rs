//! Metrics command: summarize or clear the per-run metrics log

mod human;
mod json;
mod records;

use std::path::Path;

use wikiroute_core::error::Result;
use wikiroute_core::metrics::{self, RunMetrics, Summary};
use wikiroute_core::titles::TitleMap;

use crate::cli::{MetricsArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

/// A summarized metrics log, ready for output
pub struct MetricsReport<'a> {
    pub file: &'a Path,
    pub summary: Summary,
    pub longest: Vec<&'a RunMetrics>,
    pub titles: Option<&'a TitleMap>,
}

/// Execute the metrics command
pub fn execute(ctx: &CommandContext, args: &MetricsArgs) -> Result<()> {
    let file = args
        .file
        .as_deref()
        .unwrap_or(ctx.config.output.metrics_file.as_path());

    if args.clear {
        let removed = metrics::clear_csv(file)?;
        tracing::debug!(path = %file.display(), removed, "clear_metrics");
        return output_cleared(ctx, file, removed);
    }

    let titles = args
        .titles
        .as_deref()
        .or(ctx.config.input.titles.as_deref())
        .map(TitleMap::open)
        .transpose()?;

    let rows = metrics::read_csv(file)?;
    let report = MetricsReport {
        file,
        summary: metrics::summarize(&rows),
        longest: metrics::longest_runs(&rows, args.top),
        titles: titles.as_ref(),
    };

    match ctx.cli.format {
        OutputFormat::Human => human::output_metrics_human(ctx, &report),
        OutputFormat::Json => json::output_metrics_json(&report)?,
        OutputFormat::Records => records::output_metrics_records(&report),
    }

    Ok(())
}

fn output_cleared(ctx: &CommandContext, file: &Path, removed: bool) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => {
            if removed {
                println!("Metrics data cleared: {}", file.display());
            } else if !ctx.cli.quiet {
                println!("No metrics data at {}", file.display());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": file.display().to_string(),
                "cleared": removed,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            println!(
                "H wikiroute=1 records=1 mode=metrics-clear cleared={}",
                removed
            );
        }
    }
    Ok(())
}
