//! Full-rubric runs against fixture projects.

use crate::prelude::*;

/// > The header banner is printed before any check
#[test]
fn prints_banner_first() {
    let dir = project(&[]);
    let output = dockgrade_cmd().arg(dir.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let banner = "=".repeat(60);
    assert!(stdout.starts_with(&format!(
        "\n{banner}\n  Docker Zero-to-Hero Workshop Grader\n{banner}\n\n"
    )));
}

/// > An empty project earns nothing out of the full rubric and still
/// > gets a complete report
#[test]
fn empty_project_scores_zero() {
    let dir = project(&[]);
    dockgrade_cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("0/100 (0%)"))
        .stdout(predicates::str::contains("Module 11: Image-Building Best Practices"))
        .stdout(predicates::str::contains("└─ No Dockerfile found in app/ directory"))
        .stdout(predicates::str::contains(
            "Keep going! You need 70 more points to pass (70/100)",
        ));
}

/// > Engine absence is a failed check, not a crash
#[test]
fn missing_engine_fails_engine_checks() {
    dockgrade_cmd()
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("└─ Docker is not installed or not in PATH"))
        .stdout(predicates::str::contains("└─ Could not check Docker images (is Docker running?)"));
}

/// > A complete project passes everything the engine is not needed for
#[test]
fn complete_project_passes() {
    dockgrade_cmd()
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("88/100 (88%)"))
        .stdout(predicates::str::contains("🎉 PASSED! You scored 88/100 (need 70 to pass)"));
}

/// > The untouched starter template is recognised
#[test]
fn starter_template_is_not_credited() {
    dockgrade_cmd()
        .arg(fixture("starter"))
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Dockerfile exists but appears to be the starter template. Complete the TODO items.",
        ))
        .stdout(predicates::str::contains(
            "Modify the empty state text in app/src/static/index.html (Module 05)",
        ))
        .stdout(predicates::str::contains("Keep going!"));
}

/// > Running twice on an unchanged project prints the same report
#[test]
fn output_is_deterministic() {
    let first = dockgrade_cmd().arg(fixture("complete")).output().unwrap();
    let second = dockgrade_cmd().arg(fixture("complete")).output().unwrap();
    similar_asserts::assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        String::from_utf8(second.stdout).unwrap()
    );
}

/// > Plain output has no escape codes, even with --color always under NO_COLOR
#[test]
fn no_color_wins() {
    dockgrade_cmd()
        .args(["--color", "always"])
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > --color always colors piped output
#[test]
fn color_always_colors_pipes() {
    dockgrade_cmd()
        .env_remove("NO_COLOR")
        .args(["--color", "always"])
        .arg(fixture("complete"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > -v logs each check outcome to stderr
#[test]
fn verbose_logs_to_stderr() {
    dockgrade_cmd()
        .arg("-v")
        .arg(fixture("complete"))
        .assert()
        .success()
        .stderr(predicates::str::contains("DEBUG"))
        .stderr(predicates::str::contains("Dockerfile exists"));
}
