//! Exit status, with and without `--strict`.

use crate::prelude::*;

/// > A failing verdict still exits 0 by default
#[test]
fn failing_verdict_exits_zero_by_default() {
    let dir = project(&[]);
    dockgrade_cmd().arg(dir.path()).assert().code(0);
}

/// > --strict exits 1 on a failing verdict
#[test]
fn strict_failing_verdict_exits_one() {
    let dir = project(&[]);
    dockgrade_cmd()
        .arg("--strict")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Keep going!"));
}

/// > --strict exits 0 on a passing verdict
#[test]
fn strict_passing_verdict_exits_zero() {
    dockgrade_cmd().arg("--strict").arg(fixture("complete")).assert().code(0);
}

/// > --strict exits 2 when the module filter matched nothing
#[test]
fn strict_empty_filter_exits_two() {
    dockgrade_cmd()
        .args(["--strict", "--module", "12"])
        .arg(fixture("complete"))
        .assert()
        .code(2)
        .stdout(predicates::str::contains("No graded checks for module 12"));
}

/// > An invalid config file exits 3 with the error on stderr
#[test]
fn invalid_config_exits_three() {
    let dir = project(&[("dockgrade.toml", "passing_score = \"high\"\n")]);
    dockgrade_cmd()
        .arg(dir.path())
        .assert()
        .code(3)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("invalid config"))
        .stderr(predicates::str::contains("dockgrade.toml"));
}

/// > An unwritable results file exits 3
#[test]
fn missing_project_with_json_exits_three() {
    let dir = project(&[]);
    dockgrade_cmd()
        .arg("--json")
        .arg(dir.path().join("missing"))
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to write results"));
}

/// > A fractional passing score above 100 is a config error, even when
/// > fraction mode comes from the command line
#[test]
fn fraction_score_above_hundred_exits_three() {
    let dir = project(&[("dockgrade.toml", "passing_score = 150\n")]);
    dockgrade_cmd()
        .args(["--threshold", "fraction"])
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("passing_score 150 exceeds 100"));
}
