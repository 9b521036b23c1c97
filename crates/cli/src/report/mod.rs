//! Grading report and its renderers.
//!
//! A [`Report`] is built fresh per run by the runner. [`PassPolicy`] turns
//! it into a verdict; [`text`] and [`json`] render it.

pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Passing score used when nothing else is configured.
pub const DEFAULT_PASSING_SCORE: u32 = 70;

/// Outcome of one executed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub module: u32,
    pub points: u32,
    pub earned: u32,
    pub passed: bool,
    pub message: String,
}

/// Ordered outcomes plus point totals over exactly the executed checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub checks: Vec<CheckOutcome>,
    pub total_points: u32,
    pub earned_points: u32,
}

impl Report {
    /// Append an outcome. A check earns its full points or nothing.
    pub fn record(&mut self, name: &str, module: u32, points: u32, passed: bool, message: String) {
        let earned = if passed { points } else { 0 };
        self.total_points += points;
        self.earned_points += earned;
        self.checks.push(CheckOutcome {
            name: name.to_string(),
            module,
            points,
            earned,
            passed,
            message,
        });
    }

    /// Earned share of the total, 0 when nothing ran.
    pub fn percentage(&self) -> f64 {
        if self.total_points == 0 {
            0.0
        } else {
            f64::from(self.earned_points) / f64::from(self.total_points) * 100.0
        }
    }

    /// Runs of consecutive outcomes sharing a module, in report order.
    ///
    /// A module that appears in two separate runs yields two groups.
    pub fn module_groups(&self) -> impl Iterator<Item = (u32, &[CheckOutcome])> {
        self.checks.chunk_by(|a, b| a.module == b.module).map(|group| (group[0].module, group))
    }
}

/// How the passing score is compared with the earned points.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    /// Earned points must reach the passing score as an absolute number,
    /// whatever subset ran. A single-module run rarely reaches 70.
    #[default]
    Absolute,
    /// The passing score is a percentage of the points that actually ran.
    Fraction,
}

/// Pass/fail rule applied to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassPolicy {
    pub passing_score: u32,
    pub mode: ThresholdMode,
}

impl Default for PassPolicy {
    fn default() -> Self {
        Self { passing_score: DEFAULT_PASSING_SCORE, mode: ThresholdMode::Absolute }
    }
}

impl PassPolicy {
    /// Points needed to pass a run worth `total_points`.
    pub fn required_points(&self, total_points: u32) -> u32 {
        match self.mode {
            ThresholdMode::Absolute => self.passing_score,
            ThresholdMode::Fraction => {
                let required =
                    (u64::from(total_points) * u64::from(self.passing_score)).div_ceil(100);
                u32::try_from(required).unwrap_or(u32::MAX)
            }
        }
    }

    pub fn passed(&self, report: &Report) -> bool {
        match self.mode {
            ThresholdMode::Absolute => report.earned_points >= self.passing_score,
            ThresholdMode::Fraction => {
                report.total_points > 0
                    && u64::from(report.earned_points) * 100
                        >= u64::from(self.passing_score) * u64::from(report.total_points)
            }
        }
    }

    /// Points still missing, 0 once passed.
    pub fn remaining(&self, report: &Report) -> u32 {
        self.required_points(report.total_points).saturating_sub(report.earned_points)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
