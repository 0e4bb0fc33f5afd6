use super::MetricsReport;
use wikiroute_core::error::Result;

/// Output in JSON format
pub fn output_metrics_json(report: &MetricsReport<'_>) -> Result<()> {
    let summary = &report.summary;
    let json = serde_json::json!({
        "file": report.file.display().to_string(),
        "runs": summary.runs,
        "successful_runs": summary.successful_runs,
        "algorithms": summary.algorithms,
        "longest": report.longest,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
