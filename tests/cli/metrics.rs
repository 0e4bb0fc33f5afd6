use crate::support::{setup_graph, wikiroute, write_file, DETOUR_GRAPH};
use predicates::prelude::*;

const LOG: &str = "\
2024-03-09 14:00:00,dijkstra,1,3,2.000,1.000,3,2,2,3
2024-03-09 14:00:01,dijkstra,6,5,2.000,3.000,1,-1,1,1
2024-03-09 14:00:02,dial,1,3,2.000,4.000,4,2,2,3
";

// ============================================================================
// Metrics command: summaries
// ============================================================================

#[test]
fn test_metrics_without_log() {
    let dir = tempfile::tempdir().unwrap();

    wikiroute()
        .current_dir(dir.path())
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("No performance metrics collected yet"));
}

#[test]
fn test_metrics_summarizes_runs_written_by_path() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    for algorithm in ["dijkstra", "dial", "dial"] {
        wikiroute()
            .current_dir(dir.path())
            .args(["path", "graph.csv", algorithm, "1", "3", "--no-results"])
            .assert()
            .success();
    }

    wikiroute()
        .current_dir(dir.path())
        .arg("metrics")
        .assert()
        .success()
        .stdout(predicate::str::contains("Runs: 3 (3 found a path)"))
        .stdout(predicate::str::contains("dial (2 runs, 2 found a path)"))
        .stdout(predicate::str::contains("dijkstra (1 runs, 1 found a path)"))
        .stdout(predicate::str::contains("nodes visited: mean 4.0, median 4.0"))
        .stdout(predicate::str::contains("Longest executions:"));
}

#[test]
fn test_metrics_json() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runs.csv", LOG);

    let output = wikiroute()
        .current_dir(dir.path())
        .args(["--format", "json", "metrics", "--file", "runs.csv", "--top", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["runs"], 3);
    assert_eq!(json["successful_runs"], 2);

    let dijkstra = &json["algorithms"][1];
    assert_eq!(dijkstra["algorithm"], "dijkstra");
    assert_eq!(dijkstra["algorithm_time_ms"]["median"], 2.0);
    assert_eq!(dijkstra["path_length"]["mean"], 2.0);

    let longest = json["longest"].as_array().unwrap();
    assert_eq!(longest.len(), 2);
    assert_eq!(longest[0]["algorithm"], "dial");
    assert_eq!(longest[1]["algorithm_time_ms"], 3.0);
}

#[test]
fn test_metrics_records() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "runs.csv", LOG);

    wikiroute()
        .current_dir(dir.path())
        .args(["--format", "records", "metrics", "--file", "runs.csv", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wikiroute=1 records=1 mode=metrics runs=3 successful=2\n",
        ))
        .stdout(predicate::str::contains(
            "A dial runs=1 successful=1 time_mean=4.000",
        ))
        .stdout(predicate::str::contains("length_mean=2.000"))
        .stdout(predicate::str::contains(
            "R 2024-03-09T14:00:02 dial 1 3 time=4.000 visited=4 length=2\n",
        ));
}

#[test]
fn test_metrics_labels_titles() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "performance_metrics.csv", LOG);
    write_file(dir.path(), "titles.tsv", "1\tAlpha\n3\tGamma\n");

    wikiroute()
        .current_dir(dir.path())
        .args(["metrics", "--titles", "titles.tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (Alpha) -> 3 (Gamma)"));
}

#[test]
fn test_metrics_malformed_log() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "performance_metrics.csv", "not a metrics row\n");

    wikiroute()
        .current_dir(dir.path())
        .arg("metrics")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed record on line 1"));
}

// ============================================================================
// Metrics command: clearing
// ============================================================================

#[test]
fn test_metrics_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "performance_metrics.csv", LOG);

    wikiroute()
        .current_dir(dir.path())
        .args(["metrics", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metrics data cleared"));
    assert!(!path.exists());

    wikiroute()
        .current_dir(dir.path())
        .args(["--format", "json", "metrics", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cleared\": false"));
}
