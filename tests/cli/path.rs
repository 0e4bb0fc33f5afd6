use crate::support::{path_cmd, setup_graph, wikiroute, write_file, DETOUR_GRAPH};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Path command: routing
// ============================================================================

#[test]
fn test_dijkstra_takes_cheaper_detour() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dijkstra", "1", "3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph loaded with 2 nodes."))
        .stdout(predicate::str::contains("Total edges: 3"))
        .stdout(predicate::str::contains("Source node 1 has 2 neighbors."))
        .stdout(predicate::str::contains("Target node 3 not found in graph."))
        .stdout(predicate::str::contains(
            "Path from 1 to 3:\n1 -> 2 -> 3\nLength: 2\n",
        ))
        .stdout(predicate::str::contains("Total execution time:"));
}

#[test]
fn test_dial_takes_cheaper_detour() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dial", "1", "3")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 3"));
}

#[test]
fn test_unreachable_target() {
    let (dir, _) = setup_graph("5,6,3\n");

    for algorithm in ["dijkstra", "dial"] {
        path_cmd(&dir, algorithm, "6", "5")
            .assert()
            .success()
            .stdout(predicate::str::contains("No path found from 6 to 5."));
    }
}

#[test]
fn test_same_node_on_empty_graph() {
    let (dir, _) = setup_graph("");

    path_cmd(&dir, "dial", "1", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path from 1 to 1:\n1\nLength: 0\n"));
}

#[test]
fn test_negative_node_ids() {
    let (dir, _) = setup_graph("-1,-2,3\n");

    path_cmd(&dir, "dijkstra", "-1", "-2")
        .assert()
        .success()
        .stdout(predicate::str::contains("-1 -> -2"));
}

#[test]
fn test_quiet_prints_only_the_path() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dijkstra", "1", "3")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph loaded").not())
        .stdout(predicate::str::contains("Total execution time").not())
        .stdout(predicate::str::contains("1 -> 2 -> 3"));
}

// ============================================================================
// Path command: errors
// ============================================================================

#[test]
fn test_unknown_algorithm_exit_code_2() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "astar", "1", "3")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported algorithm: astar"));
}

#[test]
fn test_unknown_algorithm_json_error() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "bfs", "1", "3")
        .args(["--format", "json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"unsupported_algorithm\""));
}

#[test]
fn test_dial_rejects_weights_above_bound() {
    let (dir, _) = setup_graph("1,2,60\n");

    path_cmd(&dir, "dial", "1", "2")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invariant violation"));
}

#[test]
fn test_dial_max_weight_override() {
    let (dir, _) = setup_graph("1,2,60\n");

    path_cmd(&dir, "dial", "1", "2")
        .args(["--max-weight", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2"));
}

#[test]
fn test_negative_weight_rejected_by_dijkstra() {
    let (dir, _) = setup_graph("1,2,-5\n");

    path_cmd(&dir, "dijkstra", "1", "2")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative edge weight"));
}

#[test]
fn test_strict_rejects_malformed_line() {
    let (dir, _) = setup_graph("1,2,3\nnot,a,record\n");

    path_cmd(&dir, "dijkstra", "1", "2")
        .arg("--strict")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed record on line 2"));
}

#[test]
fn test_lenient_loads_malformed_line() {
    let (dir, _) = setup_graph("1,2,3\n2,x\n");

    // "2,x" becomes the edge 2 -> 0 with weight 0
    path_cmd(&dir, "dijkstra", "1", "0")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 0"));
}

#[test]
fn test_missing_graph_file() {
    let dir = tempfile::tempdir().unwrap();

    wikiroute()
        .current_dir(dir.path())
        .args(["path", "nope.csv", "dijkstra", "1", "2", "--no-metrics"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open graph"));
}

#[test]
fn test_non_numeric_node_without_titles() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dijkstra", "one", "3")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node id: one"));
}

// ============================================================================
// Path command: output formats
// ============================================================================

#[test]
fn test_json_output() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    let output = path_cmd(&dir, "dijkstra", "1", "3")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["length"], 2);
    assert_eq!(json["distance"], 5);
    assert_eq!(json["nodes_visited"], 3);
    assert_eq!(json["graph"]["nodes"], 2);
    assert_eq!(json["metrics"]["path_length"], 2);
}

#[test]
fn test_json_output_unreachable() {
    let (dir, _) = setup_graph("5,6,3\n");

    let output = path_cmd(&dir, "dial", "6", "5")
        .args(["--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["length"], -1);
    assert!(json["distance"].is_null());
}

#[test]
fn test_records_output() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dijkstra", "1", "3")
        .args(["--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wikiroute=1 records=1 mode=path algorithm=dijkstra from=1 to=3 found=true length=2 distance=5 visited=3\n",
        ))
        .stdout(predicate::str::contains("N 2\n"))
        .stdout(predicate::str::contains("E 1 2\nE 2 3\n"));
}

// ============================================================================
// Path command: titles
// ============================================================================

#[test]
fn test_titles_resolve_and_label_nodes() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);
    write_file(dir.path(), "titles.tsv", "1\tAlpha\n2\tBeta\n3\tGamma\n");

    path_cmd(&dir, "dijkstra", "Alpha", "Gamma")
        .args(["--titles", "titles.tsv", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 (Alpha) -> 2 (Beta) -> 3 (Gamma)",
        ));
}

#[test]
fn test_unknown_title_is_data_error() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);
    write_file(dir.path(), "titles.tsv", "1\tAlpha\n");

    path_cmd(&dir, "dijkstra", "Alpha", "Omega")
        .args(["--titles", "titles.tsv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("title not found: Omega"));
}

// ============================================================================
// Path command: metrics and results files
// ============================================================================

#[test]
fn test_default_metrics_and_results_files() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    for _ in 0..2 {
        wikiroute()
            .current_dir(dir.path())
            .args(["path", "graph.csv", "dial", "1", "3"])
            .assert()
            .success();
    }

    let metrics = fs::read_to_string(dir.path().join("performance_metrics.csv")).unwrap();
    let rows: Vec<&str> = metrics.lines().collect();
    assert_eq!(rows.len(), 2);
    for row in rows {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 10);
        assert_eq!(&fields[1..4], &["dial", "1", "3"]);
        assert_eq!(&fields[6..], &["4", "2", "2", "3"]);
    }

    let result =
        fs::read_to_string(dir.path().join("results").join("shortest_path.txt")).unwrap();
    assert_eq!(result, "Path from 1 to 3:\n1 -> 2 -> 3\nLength: 2\n");
}

#[test]
fn test_unreachable_metrics_row() {
    let (dir, _) = setup_graph("5,6,3\n");

    wikiroute()
        .current_dir(dir.path())
        .args([
            "path",
            "graph.csv",
            "dijkstra",
            "6",
            "5",
            "--metrics-file",
            "out/metrics.csv",
            "--results-file",
            "out/result.txt",
        ])
        .assert()
        .success();

    let metrics = fs::read_to_string(dir.path().join("out").join("metrics.csv")).unwrap();
    assert!(metrics.trim_end().ends_with(",1,-1,1,1"), "{metrics}");

    let result = fs::read_to_string(dir.path().join("out").join("result.txt")).unwrap();
    assert_eq!(result, "No path found from 6 to 5.\n");
}

#[test]
fn test_no_metrics_and_no_results() {
    let (dir, _) = setup_graph(DETOUR_GRAPH);

    path_cmd(&dir, "dijkstra", "1", "3").assert().success();

    assert!(!dir.path().join("performance_metrics.csv").exists());
    assert!(!dir.path().join("results").exists());
}
