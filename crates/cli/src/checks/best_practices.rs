//! Module 11: Image-Building Best Practices.

use super::text::instructions;
use crate::artifact::{Artifact, Project};
use crate::check::CheckResult;

/// Two or more `FROM` lines. Whether later stages copy from earlier ones is
/// not checked.
pub(super) fn multi_stage(dockerfile: &str) -> CheckResult {
    let stages = instructions(dockerfile, "FROM")
        .into_iter()
        .filter(|line| line.get(4..).is_some_and(|rest| rest.starts_with(char::is_whitespace)))
        .count();

    if stages >= 2 {
        CheckResult::pass(format!("Multi-stage build detected ({stages} stages)"))
    } else {
        CheckResult::fail("Use multiple FROM statements for a multi-stage build (Module 11)")
    }
}

/// Presence is enough; the message notes whether `node_modules` is excluded.
pub(super) fn dockerignore(project: &Project) -> CheckResult {
    if !project.exists(Artifact::DockerIgnore) {
        return CheckResult::fail(
            "Create app/.dockerignore to exclude unnecessary files from build context",
        );
    }
    if project.read(Artifact::DockerIgnore).contains("node_modules") {
        CheckResult::pass(".dockerignore found with node_modules excluded")
    } else {
        CheckResult::pass(".dockerignore found")
    }
}

#[cfg(test)]
#[path = "best_practices_tests.rs"]
mod tests;
