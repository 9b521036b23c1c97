//! Module 09: Multi-Container Apps.
//!
//! Environment variables are found by substring anywhere in the compose
//! file, commented out or not.

use super::text::has_indented_key;
use crate::check::CheckResult;

pub(super) fn mysql_host(compose: &str) -> CheckResult {
    if compose.contains("MYSQL_HOST") {
        CheckResult::pass("MYSQL_HOST environment variable is set")
    } else {
        CheckResult::fail("Set MYSQL_HOST environment variable in docker-compose.yml")
    }
}

/// A user, a password, and a database name, each under either the app-side
/// or the server-side variable name.
pub(super) fn mysql_credentials(compose: &str) -> CheckResult {
    let has_user = compose.contains("MYSQL_USER");
    let has_password =
        compose.contains("MYSQL_PASSWORD") || compose.contains("MYSQL_ROOT_PASSWORD");
    let has_db = compose.contains("MYSQL_DB") || compose.contains("MYSQL_DATABASE");

    if has_user && has_password && has_db {
        return CheckResult::pass("MySQL credentials are configured");
    }

    let mut missing = Vec::new();
    if !has_user {
        missing.push("MYSQL_USER");
    }
    if !has_password {
        missing.push("MYSQL_PASSWORD/MYSQL_ROOT_PASSWORD");
    }
    if !has_db {
        missing.push("MYSQL_DB/MYSQL_DATABASE");
    }
    CheckResult::fail(format!("Missing MySQL env vars: {}", missing.join(", ")))
}

pub(super) fn network(compose: &str) -> CheckResult {
    let has_app = has_indented_key(compose, "app");
    let has_mysql = has_indented_key(compose, "mysql");

    match (has_app, has_mysql) {
        (true, true) => CheckResult::pass("Multi-container setup with app and mysql services"),
        (true, false) => CheckResult::fail("Add a 'mysql' service to docker-compose.yml"),
        _ => CheckResult::fail("Configure both app and mysql services in docker-compose.yml"),
    }
}

#[cfg(test)]
#[path = "multi_container_tests.rs"]
mod tests;
