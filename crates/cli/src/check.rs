//! Check definitions, results, and the registry that holds them.

use std::fmt;

use crate::artifact::{Artifact, Project};
use crate::engine::EngineProbe;

/// Outcome of evaluating one check.
///
/// `message` is always present: an affirmation on pass, remediation text on
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self { passed: true, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { passed: false, message: message.into() }
    }
}

/// What an evaluator may consult: the project files and the engine.
pub struct CheckContext<'a> {
    pub project: &'a Project,
    pub engine: &'a dyn EngineProbe,
}

impl CheckContext<'_> {
    /// Shorthand for reading an artifact from the project.
    pub fn read(&self, artifact: Artifact) -> String {
        self.project.read(artifact)
    }
}

/// An evaluator reads the project or engine and never mutates the project.
pub type Evaluator = Box<dyn Fn(&CheckContext<'_>) -> CheckResult>;

/// One rubric entry.
pub struct CheckDef {
    pub name: &'static str,
    pub points: u32,
    pub module: u32,
    evaluator: Evaluator,
}

impl CheckDef {
    pub fn new<F>(name: &'static str, points: u32, module: u32, evaluator: F) -> Self
    where
        F: Fn(&CheckContext<'_>) -> CheckResult + 'static,
    {
        Self { name, points, module, evaluator: Box::new(evaluator) }
    }

    pub fn evaluate(&self, ctx: &CheckContext<'_>) -> CheckResult {
        (self.evaluator)(ctx)
    }
}

impl fmt::Debug for CheckDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDef")
            .field("name", &self.name)
            .field("points", &self.points)
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable set of checks.
///
/// Built once at startup and passed to the runner; tests build their own.
#[derive(Debug, Default)]
pub struct Registry {
    checks: Vec<CheckDef>,
}

impl Registry {
    pub fn new(checks: Vec<CheckDef>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> &[CheckDef] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Checks belonging to `module` (all checks when `None`), in definition order.
    pub fn select(&self, module: Option<u32>) -> Vec<&CheckDef> {
        self.checks.iter().filter(|c| module.is_none_or(|m| c.module == m)).collect()
    }

    pub fn total_points(&self) -> u32 {
        self.checks.iter().map(|c| c.points).sum()
    }

    /// Module numbers in order of first appearance.
    pub fn modules(&self) -> Vec<u32> {
        let mut modules: Vec<u32> = Vec::new();
        for check in &self.checks {
            if !modules.contains(&check.module) {
                modules.push(check.module);
            }
        }
        modules
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
