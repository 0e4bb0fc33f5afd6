use crate::support::{setup_graph, wikiroute, DETOUR_GRAPH};
use predicates::prelude::*;

// ============================================================================
// Stats command
// ============================================================================

#[test]
fn test_stats_human() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    wikiroute()
        .current_dir(dir.path())
        .args(["stats", "graph.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph loaded with 2 nodes."))
        .stdout(predicate::str::contains("Total edges: 3"))
        .stdout(predicate::str::contains("Edge weights: 1..=10"))
        .stdout(predicate::str::contains("Load time:"));
}

#[test]
fn test_stats_json() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    let output = wikiroute()
        .current_dir(dir.path())
        .args(["--format", "json", "stats", "graph.csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 2);
    assert_eq!(json["edges"], 3);
    assert_eq!(json["min_weight"], 1);
    assert_eq!(json["max_weight"], 10);
}

#[test]
fn test_stats_records_empty_graph() {
    let (dir, _) = setup_graph("\n\n");

    wikiroute()
        .current_dir(dir.path())
        .args(["--format", "records", "stats", "graph.csv"])
        .assert()
        .success()
        .stdout(
            "H wikiroute=1 records=1 mode=stats nodes=0 edges=0 min_weight=- max_weight=-\n",
        );
}

#[test]
fn test_stats_strict_malformed() {
    let (dir, _) = setup_graph("1,2\n");

    wikiroute()
        .current_dir(dir.path())
        .args(["stats", "graph.csv", "--strict"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed record on line 1"));
}
