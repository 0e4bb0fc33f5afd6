use super::PathOutcome;

/// Escape double quotes for embedding in a quoted records field
fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Output in records format
pub fn output_path_records(outcome: &PathOutcome<'_>) {
    let result = &outcome.result;
    let distance = result
        .distance
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "H wikiroute=1 records=1 mode=path algorithm={} from={} to={} found={} length={} distance={} visited={}",
        outcome.algorithm.name(),
        outcome.source,
        outcome.target,
        result.found(),
        result.path_length(),
        distance,
        result.nodes_visited
    );

    for &node in &result.path {
        match outcome.titles.and_then(|titles| titles.title(node)) {
            Some(title) => println!("N {} \"{}\"", node, escape_quotes(title)),
            None => println!("N {}", node),
        }
    }

    for pair in result.path.windows(2) {
        println!("E {} {}", pair[0], pair[1]);
    }
}
