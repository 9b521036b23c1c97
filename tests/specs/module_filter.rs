//! `--module` filtering.

use crate::prelude::*;

/// > Only the selected module is graded and totals cover just its checks
#[test]
fn module_four_only() {
    dockgrade_cmd()
        .args(["--module", "4"])
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("Module 04: Containerize an Application"))
        .stdout(predicates::str::contains("Module 05").not())
        .stdout(predicates::str::contains("23/25 (92%)"))
        .stdout(predicates::str::contains(
            "Keep going! You need 47 more points to pass (70/25)",
        ));
}

/// > A module without checks prints the notice and nothing else
#[test]
fn unknown_module_prints_notice() {
    dockgrade_cmd()
        .args(["--module", "99"])
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("  No graded checks for module 99\n"))
        .stdout(predicates::str::contains("Progress").not());
}

/// > Module numbers start at 1
#[test]
fn module_zero_is_rejected() {
    dockgrade_cmd().args(["--module", "0"]).assert().code(2);
}

/// > The short flag works too
#[test]
fn short_module_flag() {
    dockgrade_cmd()
        .args(["-m", "11"])
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("✓ Multi-stage Dockerfile"))
        .stdout(predicates::str::contains("5/5 (100%)"));
}
