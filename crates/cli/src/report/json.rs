//! JSON results artifact.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{CheckOutcome, PassPolicy, Report};
use crate::error::{Error, Result};

/// File name of the results artifact, written at the project root.
pub const RESULTS_FILE: &str = "results.json";

#[derive(Serialize)]
struct Results<'a> {
    total_points: u32,
    earned_points: u32,
    passing_score: u32,
    passed: bool,
    checks: &'a [CheckOutcome],
}

/// JSON format report formatter.
pub struct JsonFormatter {
    policy: PassPolicy,
}

impl JsonFormatter {
    pub fn new(policy: PassPolicy) -> Self {
        Self { policy }
    }

    /// Pretty-printed JSON with a two-space indent.
    pub fn format(&self, report: &Report) -> Result<String> {
        let results = Results {
            total_points: report.total_points,
            earned_points: report.earned_points,
            passing_score: self.policy.passing_score,
            passed: self.policy.passed(report),
            checks: &report.checks,
        };
        Ok(serde_json::to_string_pretty(&results)?)
    }

    /// Write [`RESULTS_FILE`] under `root`, returning its path.
    pub fn write(&self, root: &Path, report: &Report) -> Result<PathBuf> {
        let path = root.join(RESULTS_FILE);
        let content = self.format(report)?;
        std::fs::write(&path, content)
            .map_err(|source| Error::WriteResults { path: path.clone(), source })?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
