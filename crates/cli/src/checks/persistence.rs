//! Module 07: Persist the DB.
//!
//! Either the compose manifest or a `todo` volume on the engine is accepted
//! as evidence. An unreachable engine just means no volume evidence.

use crate::check::CheckResult;
use crate::engine::EngineProbe;

/// Engine volumes whose name mentions `todo`, or none if listing failed.
fn todo_volumes(engine: &dyn EngineProbe) -> Vec<String> {
    match engine.list_volumes() {
        Ok(volumes) => {
            volumes.into_iter().filter(|v| v.to_lowercase().contains("todo")).collect()
        }
        Err(e) => {
            tracing::debug!("volume listing failed: {}", e);
            Vec::new()
        }
    }
}

/// The manifest names one of the workshop's volumes and has a `volumes:`
/// key somewhere (service-level or top-level).
pub(super) fn volume_config(compose: &str, engine: &dyn EngineProbe) -> CheckResult {
    let names_volume = compose.contains("todo-db") || compose.contains("todo-mysql-data");
    if names_volume && compose.contains("volumes:") {
        return CheckResult::pass("Volume configuration found in docker-compose.yml");
    }
    if !todo_volumes(engine).is_empty() {
        return CheckResult::pass("Docker volume found for todo app");
    }
    CheckResult::fail("Configure a named volume for data persistence (Module 07)")
}

/// A known data directory appears anywhere in the manifest; it is not
/// checked to be the target side of a volume mapping.
pub(super) fn volume_mount_path(compose: &str, engine: &dyn EngineProbe) -> CheckResult {
    if compose.contains("/var/lib/mysql") || compose.contains("/app/data") {
        return CheckResult::pass("Volume mount path is correctly configured");
    }
    let volumes = todo_volumes(engine);
    if !volumes.is_empty() {
        return CheckResult::pass(format!("Volume(s) found: {}", volumes.join(", ")));
    }
    CheckResult::fail("Mount path should point to the database data directory")
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod tests;
