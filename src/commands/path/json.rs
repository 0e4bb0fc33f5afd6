use super::PathOutcome;
use wikiroute_core::error::Result;

/// Output in JSON format
pub fn output_path_json(outcome: &PathOutcome<'_>) -> Result<()> {
    let result = &outcome.result;
    let mut json = serde_json::json!({
        "algorithm": outcome.algorithm.name(),
        "source": outcome.source,
        "target": outcome.target,
        "found": result.found(),
        "path": result.path,
        "length": result.path_length(),
        "distance": result.distance,
        "nodes_visited": result.nodes_visited,
        "graph": {
            "nodes": outcome.graph.node_count(),
            "edges": outcome.graph.edge_count(),
        },
        "metrics": outcome.metrics,
    });

    if let Some(titles) = outcome.titles {
        let labels: Vec<Option<&str>> = result.path.iter().map(|&id| titles.title(id)).collect();
        if let Some(obj_mut) = json.as_object_mut() {
            obj_mut.insert("titles".to_string(), serde_json::json!(labels));
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
