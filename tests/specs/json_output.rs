//! `--json` results file.

use serde_json::Value;

use crate::prelude::*;

fn results(dir: &std::path::Path) -> Value {
    let content = std::fs::read_to_string(dir.join("results.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// > --json writes results.json at the project root and says where
#[test]
fn json_writes_results_file() {
    let dir = fixture_copy("complete");
    dockgrade_cmd()
        .arg("--json")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("88/100"))
        .stdout(predicates::str::contains("  Results written to "))
        .stdout(predicates::str::contains("results.json"));

    let value = results(dir.path());
    assert_eq!(value["total_points"], 100);
    assert_eq!(value["earned_points"], 88);
    assert_eq!(value["passing_score"], 70);
    assert_eq!(value["passed"], true);
    assert_eq!(value["checks"].as_array().unwrap().len(), 27);

    let first = &value["checks"][0];
    assert_eq!(first["name"], "Dockerfile exists");
    assert_eq!(first["module"], 4);
    assert_eq!(first["points"], 5);
    assert_eq!(first["earned"], 5);
    assert_eq!(first["passed"], true);
    assert_eq!(first["message"], "Dockerfile found in app/");
}

/// > The file covers only the filtered checks
#[test]
fn json_with_module_filter() {
    let dir = fixture_copy("complete");
    dockgrade_cmd().args(["--json", "--module", "9"]).arg(dir.path()).assert().success();

    let value = results(dir.path());
    assert_eq!(value["total_points"], 15);
    assert_eq!(value["passed"], false);
    let checks = value["checks"].as_array().unwrap();
    assert!(checks.iter().all(|c| c["module"] == 9));
}

/// > No results file without --json
#[test]
fn no_json_no_file() {
    let dir = project(&[]);
    dockgrade_cmd().arg(dir.path()).assert().success();
    assert!(!dir.path().join("results.json").exists());
}

/// > No results file when the module filter matched nothing
#[test]
fn json_with_empty_filter_writes_nothing() {
    let dir = project(&[]);
    dockgrade_cmd()
        .args(["--json", "--module", "3"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Results written").not());
    assert!(!dir.path().join("results.json").exists());
}
