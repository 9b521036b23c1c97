//! Module 06: Share the Application.
//!
//! Both checks look at every local image, so any `user/...todo...` image on
//! the machine passes, whoever built it.

use std::sync::LazyLock;

use regex::Regex;

use crate::check::CheckResult;
use crate::engine::EngineProbe;

/// `user/repository:tag` at the start of the line.
#[allow(clippy::expect_used)]
static USER_REPO_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+/[\w\-]+:\w+").expect("valid regex pattern"));

pub(super) fn image_tagged(engine: &dyn EngineProbe) -> CheckResult {
    let images = match engine.list_images() {
        Ok(images) => images,
        Err(e) => {
            tracing::debug!("image listing failed: {}", e);
            return CheckResult::fail("Could not check Docker images (is Docker running?)");
        }
    };
    match images.iter().find(|line| line.contains('/') && line.to_lowercase().contains("todo")) {
        Some(image) => CheckResult::pass(format!("Image tagged correctly: {image}")),
        None => {
            CheckResult::fail("No image found with username/repository format containing 'todo'")
        }
    }
}

/// Stricter than [`image_tagged`]: the tag part must be present.
pub(super) fn tag_format(engine: &dyn EngineProbe) -> CheckResult {
    let Ok(images) = engine.list_images() else {
        return CheckResult::fail("Could not check Docker images");
    };
    let tagged = images
        .iter()
        .find(|line| USER_REPO_TAG.is_match(line) && line.to_lowercase().contains("todo"));
    match tagged {
        Some(image) => CheckResult::pass(format!("Tag format is valid: {image}")),
        None => CheckResult::fail("Tag should follow format: username/repository:tag"),
    }
}

#[cfg(test)]
#[path = "share_tests.rs"]
mod tests;
