//! Module 10: Use Docker Compose.
//!
//! Service detection looks for indented `name:` keys, so a key of the same
//! name under another mapping (for example `depends_on`) is mistaken for a
//! service.

use std::sync::LazyLock;

use regex::Regex;

use super::text::{has_indented_key, has_top_level_key};
use crate::artifact::{Artifact, Project};
use crate::check::CheckResult;

/// `ports:` followed by a list item mapping 3000 to 3000.
#[allow(clippy::expect_used)]
static PORTS_3000: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ports:\s*\n\s+-\s*["']?3000:3000"#).expect("valid regex pattern")
});

/// How far past `services:` a leftover `# TODO:` is noticed.
const TODO_WINDOW: usize = 100;

/// The manifest exists and declares `services:`. Leftover TODOs right after
/// `services:` change the message, not the outcome.
pub(super) fn exists(project: &Project) -> CheckResult {
    if !project.exists(Artifact::Compose) {
        return CheckResult::fail("No docker-compose.yml found in project root");
    }

    let content = project.read(Artifact::Compose);
    let Some((_, after_services)) = content.split_once("services:") else {
        return CheckResult::fail("docker-compose.yml exists but doesn't define any services");
    };

    let window: String = after_services.chars().take(TODO_WINDOW).collect();
    if window.contains("# TODO:") {
        CheckResult::pass("docker-compose.yml found (may still have TODOs to complete)")
    } else {
        CheckResult::pass("docker-compose.yml found with service definitions")
    }
}

/// An `app` (or `web`) service, and a `build:` key anywhere in the file.
pub(super) fn app_service(compose: &str) -> CheckResult {
    let has_app = has_indented_key(compose, "app") || has_indented_key(compose, "web");
    let has_build = compose.contains("build:");

    match (has_app, has_build) {
        (true, true) => CheckResult::pass("App service with build configuration defined"),
        (true, false) => CheckResult::fail("App service exists but needs 'build:' directive"),
        _ => CheckResult::fail("Define a 'web' (or 'app') service in docker-compose.yml"),
    }
}

/// A `mysql` service; the image tag only affects the message.
pub(super) fn mysql_service(compose: &str) -> CheckResult {
    if !has_indented_key(compose, "mysql") {
        return CheckResult::fail("Define a 'mysql' service using the mysql:8.0 image");
    }
    if compose.contains("mysql:8") || compose.contains("mysql:latest") {
        CheckResult::pass("MySQL service with image defined")
    } else {
        CheckResult::pass("MySQL service defined")
    }
}

/// A `volumes:` key at column zero. Service-level `volumes:` lists do not
/// count.
pub(super) fn volumes(compose: &str) -> CheckResult {
    if has_top_level_key(compose, "volumes") {
        CheckResult::pass("Named volumes defined at top level")
    } else {
        CheckResult::fail("Define named volumes at the top level of docker-compose.yml")
    }
}

/// `3000:3000` as a `ports:` list item, or failing that anywhere at all.
pub(super) fn ports(compose: &str) -> CheckResult {
    if PORTS_3000.is_match(compose) {
        return CheckResult::pass("Port 3000:3000 mapped for app service");
    }
    if compose.contains("3000:3000") {
        return CheckResult::pass("Port 3000 mapping found");
    }
    CheckResult::fail("Map port 3000:3000 in the app service")
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
