//! Module 05: Update the Application.

use crate::check::CheckResult;

/// Empty-state text shipped with the starter app.
pub(super) const ORIGINAL_EMPTY_STATE: &str = "No todos yet! Add one above to get started.";

const UNREADABLE: &str = "Could not read app/src/static/index.html";

/// The page no longer carries the original empty-state text. Any edit that
/// removes or rewords that sentence counts, wherever it happens.
pub(super) fn source_modified(html: &str) -> CheckResult {
    if html.is_empty() {
        return CheckResult::fail(UNREADABLE);
    }
    if html.contains(ORIGINAL_EMPTY_STATE) {
        return CheckResult::fail(
            "Modify the empty state text in app/src/static/index.html (Module 05)",
        );
    }
    CheckResult::pass("Source code has been modified from the original")
}

/// The `empty-state` element survives with new text. The element is found by
/// its exact `id="empty-state"` spelling; single quotes are missed.
pub(super) fn empty_state_changed(html: &str) -> CheckResult {
    if html.is_empty() {
        return CheckResult::fail(UNREADABLE);
    }
    if !html.contains(r#"id="empty-state""#) {
        return CheckResult::fail("The empty-state element should still exist in index.html");
    }
    if html.contains(ORIGINAL_EMPTY_STATE) {
        return CheckResult::fail("Change the text inside the empty-state paragraph");
    }
    CheckResult::pass("Empty state text has been updated")
}

#[cfg(test)]
#[path = "application_tests.rs"]
mod tests;
