//! `dockgrade.toml` and the threshold options.

use crate::prelude::*;

const DOCKERFILE: &str = "FROM node:18-alpine\nWORKDIR /app\nCOPY package.json .\nRUN npm install\nCOPY . .\nEXPOSE 3000\nCMD [\"npm\",\"start\"]\n";

/// > threshold = "fraction" lets a single-module run pass
#[test]
fn fraction_threshold_from_config() {
    let dir = project(&[
        ("app/Dockerfile", DOCKERFILE),
        ("dockgrade.toml", "threshold = \"fraction\"\n"),
    ]);
    dockgrade_cmd()
        .args(["--module", "4", "--strict"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("🎉 PASSED! You scored 23/25 (need 18 to pass)"));
}

/// > --threshold overrides the config file
#[test]
fn threshold_flag_overrides_config() {
    let dir = project(&[
        ("app/Dockerfile", DOCKERFILE),
        ("dockgrade.toml", "threshold = \"fraction\"\n"),
    ]);
    dockgrade_cmd()
        .args(["--module", "4", "--threshold", "absolute"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("You need 47 more points to pass (70/25)"));
}

/// > passing_score changes the verdict and the JSON field
#[test]
fn custom_passing_score() {
    let dir = project(&[("app/Dockerfile", DOCKERFILE), ("dockgrade.toml", "passing_score = 20\n")]);
    dockgrade_cmd()
        .args(["--module", "4", "--json"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("🎉 PASSED! You scored 23/25 (need 20 to pass)"));

    let content = std::fs::read_to_string(dir.path().join("results.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["passing_score"], 20);
    assert_eq!(value["passed"], true);
}

/// > The engine program set in the config is overridden by DOCKGRADE_ENGINE
#[test]
fn engine_env_overrides_config() {
    let dir = project(&[("dockgrade.toml", "[engine]\nprogram = \"docker\"\n")]);
    dockgrade_cmd()
        .args(["--module", "6"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Could not check Docker images (is Docker running?)"));
}
