//! Module 04: Containerize an Application.
//!
//! Directive checks search the whole Dockerfile, so a directive inside a
//! comment or in an earlier build stage still counts.

use std::sync::LazyLock;

use regex::Regex;

use super::BUILD_TAG;
use super::text::instructions;
use crate::artifact::{Artifact, Project};
use crate::check::{CheckContext, CheckResult};
use crate::engine::ProbeError;

#[allow(clippy::expect_used)]
static FROM_NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)FROM\s+node:").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static WORKDIR_APP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)WORKDIR\s+/app").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static RUN_INSTALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)RUN\s+(npm|yarn)\s+install").expect("valid regex pattern"));

/// `COPY . .` in its exact (case-sensitive) spelling.
#[allow(clippy::expect_used)]
static COPY_ALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"COPY\s+\.\s+\.").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static EXPOSE_3000: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EXPOSE\s+3000").expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CMD\s+").expect("valid regex pattern"));

/// Dockerfile is present and is not the untouched starter template.
pub(super) fn exists(project: &Project) -> CheckResult {
    if !project.exists(Artifact::Dockerfile) {
        return CheckResult::fail("No Dockerfile found in app/ directory");
    }
    if is_starter_template(&project.read(Artifact::Dockerfile)) {
        return CheckResult::fail(
            "Dockerfile exists but appears to be the starter template. Complete the TODO items.",
        );
    }
    CheckResult::pass("Dockerfile found in app/")
}

/// The starter ships a single `FROM` followed by `# TODO:` markers and no
/// `COPY`. A learner who adds a `COPY` between `FROM` and the first TODO
/// is treated as having started, even with TODOs left over.
pub(super) fn is_starter_template(content: &str) -> bool {
    if !content.contains("# TODO:") || content.matches("FROM").count() > 1 {
        return false;
    }
    let before_todo = content.split("# TODO").next().unwrap_or_default();
    let after_from = before_todo.rsplit("FROM").next().unwrap_or_default();
    !after_from.contains("COPY")
}

pub(super) fn from_node(content: &str) -> CheckResult {
    if FROM_NODE.is_match(content) {
        CheckResult::pass("Dockerfile uses node base image")
    } else {
        CheckResult::fail("Dockerfile should use a node base image (e.g., FROM node:18-alpine)")
    }
}

pub(super) fn workdir(content: &str) -> CheckResult {
    if WORKDIR_APP.is_match(content) {
        CheckResult::pass("WORKDIR set to /app")
    } else {
        CheckResult::fail("Dockerfile should set WORKDIR to /app")
    }
}

/// The first of at least two `COPY` lines mentions the package manifest,
/// evidence of cache-friendly layer ordering. Only "package" is looked for,
/// so `COPY package-lock.json` alone is accepted.
pub(super) fn copy_package_first(content: &str) -> CheckResult {
    let copies = instructions(content, "COPY");
    match copies.as_slice() {
        [first, _, ..] if first.to_lowercase().contains("package") => {
            CheckResult::pass("package.json is copied before source code (good for layer caching)")
        }
        [_] => {
            CheckResult::fail("Use two COPY instructions: copy package.json first, then the rest")
        }
        _ => CheckResult::fail("Dockerfile should COPY package.json before COPY . ."),
    }
}

pub(super) fn run_install(content: &str) -> CheckResult {
    if RUN_INSTALL.is_match(content) {
        CheckResult::pass("Dependencies are installed with npm/yarn install")
    } else {
        CheckResult::fail("Dockerfile should RUN npm install (or yarn install)")
    }
}

/// Two or more `COPY` lines, or a single `COPY . .`. What the second `COPY`
/// actually copies is not inspected.
pub(super) fn copy_source(content: &str) -> CheckResult {
    let copy_count = instructions(content, "COPY").len();
    if copy_count >= 2 {
        return CheckResult::pass("Source code is copied into the image");
    }
    if copy_count == 1 && COPY_ALL.is_match(content) {
        return CheckResult::pass("Source code is copied (single COPY . .)");
    }
    CheckResult::fail("Dockerfile should COPY source code into the image")
}

pub(super) fn expose(content: &str) -> CheckResult {
    if EXPOSE_3000.is_match(content) {
        CheckResult::pass("Port 3000 is exposed")
    } else {
        CheckResult::fail("Dockerfile should EXPOSE 3000")
    }
}

pub(super) fn cmd(content: &str) -> CheckResult {
    if CMD.is_match(content) {
        CheckResult::pass("CMD instruction is defined")
    } else {
        CheckResult::fail("Dockerfile should have a CMD instruction to start the app")
    }
}

/// Build the app directory with the engine. The probe removes the image
/// again after a successful build.
pub(super) fn image_builds(ctx: &CheckContext<'_>) -> CheckResult {
    match ctx.engine.build(&ctx.project.app_dir(), BUILD_TAG) {
        Ok(()) => CheckResult::pass("Docker image builds successfully"),
        Err(ProbeError::NotInstalled { .. }) => {
            CheckResult::fail("Docker is not installed or not in PATH")
        }
        Err(ProbeError::TimedOut { secs, .. }) => {
            CheckResult::fail(format!("Docker build timed out (>{secs} seconds)"))
        }
        Err(ProbeError::Failed { stderr, .. }) => {
            CheckResult::fail(format!("Docker build failed: {stderr}"))
        }
        Err(ProbeError::Io { message, .. }) => {
            CheckResult::fail(format!("Could not test Docker build: {message}"))
        }
    }
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
