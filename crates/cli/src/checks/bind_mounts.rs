//! Module 08: Use Bind Mounts.

use crate::check::CheckResult;

/// Any of three signals: a `./x:/app` style mapping in compose, a
/// development hint in the Dockerfile, or a compose build context of
/// `./app`. The Dockerfile hint is a bare substring, so words such as
/// "device" or "/dev/null" also satisfy it.
pub(super) fn bind_mount(compose: &str, dockerfile: &str) -> CheckResult {
    if compose.contains("./") && compose.contains(":/app") {
        return CheckResult::pass("Bind mount configuration found");
    }

    let dockerfile = dockerfile.to_lowercase();
    if dockerfile.contains("nodemon") || dockerfile.contains("dev") {
        return CheckResult::pass("Development configuration found");
    }

    if compose.contains("build:") && compose.contains("./app") {
        return CheckResult::pass("Build context configured (implies understanding of bind mounts)");
    }

    CheckResult::fail("Set up a bind mount for development workflow (Module 08)")
}

/// package.json mentions a `"dev"` key and nodemon, not necessarily together.
pub(super) fn dev_workflow(package_json: &str) -> CheckResult {
    if package_json.contains(r#""dev""#) && package_json.contains("nodemon") {
        CheckResult::pass("Development script with nodemon is configured")
    } else {
        CheckResult::fail("package.json should have a 'dev' script using nodemon")
    }
}

#[cfg(test)]
#[path = "bind_mounts_tests.rs"]
mod tests;
