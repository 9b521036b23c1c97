//! Sequential check runner with error recovery.
//!
//! Runs checks in registry order, isolating panics so one broken check
//! doesn't prevent the others from running.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::check::{CheckContext, CheckDef, CheckResult, Registry};
use crate::error::{Error, Result};
use crate::report::Report;

/// Configuration for the check runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerConfig {
    /// Only run checks from this module (None = all).
    pub module: Option<u32>,
}

/// The check runner executes the selected checks one after another.
pub struct CheckRunner {
    config: RunnerConfig,
}

impl CheckRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run the selected checks and return a fresh report.
    ///
    /// Checks run sequentially because some share engine state (a build
    /// followed by an image listing).
    pub fn run(&self, registry: &Registry, ctx: &CheckContext<'_>) -> Result<Report> {
        let selected = registry.select(self.config.module);
        if let Some(module) = self.config.module
            && selected.is_empty()
        {
            return Err(Error::NoChecksForModule(module));
        }

        let mut report = Report::default();
        for check in selected {
            let result = evaluate_isolated(check, ctx);
            tracing::debug!(
                check = check.name,
                module = check.module,
                passed = result.passed,
                "{}",
                result.message
            );
            report.record(check.name, check.module, check.points, result.passed, result.message);
        }
        Ok(report)
    }
}

/// Evaluate one check, turning a panic into a failed result.
fn evaluate_isolated(check: &CheckDef, ctx: &CheckContext<'_>) -> CheckResult {
    match catch_unwind(AssertUnwindSafe(|| check.evaluate(ctx))) {
        Ok(result) => result,
        Err(payload) => {
            tracing::warn!("check {:?} panicked", check.name);
            CheckResult::fail(format!("Error: {}", panic_message(payload.as_ref())))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "check panicked".to_string()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
