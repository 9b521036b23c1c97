//! Console report output.

use std::io;
use std::path::Path;

use termcolor::{ColorSpec, WriteColor};

use super::{CheckOutcome, PassPolicy, Report};
use crate::checks::module_title;
use crate::color::scheme;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 50;
const BAR_WIDTH: u32 = 40;
const NAME_WIDTH: usize = 40;

/// Text format report formatter.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    policy: PassPolicy,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, policy: PassPolicy) -> Self {
        Self { out, policy }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner printed before any check runs.
    pub fn write_header(&mut self) -> io::Result<()> {
        let banner = "=".repeat(BANNER_WIDTH);
        writeln!(self.out)?;
        self.styled(&scheme::rule(), &banner)?;
        writeln!(self.out)?;
        self.styled(&scheme::title(), "  Docker Zero-to-Hero Workshop Grader")?;
        writeln!(self.out)?;
        self.styled(&scheme::rule(), &banner)?;
        writeln!(self.out)?;
        writeln!(self.out)
    }

    /// Module sections, progress bar, and verdict.
    pub fn write_report(&mut self, report: &Report) -> io::Result<()> {
        for (index, (module, outcomes)) in report.module_groups().enumerate() {
            if index > 0 {
                writeln!(self.out)?;
            }
            self.write_module_header(module)?;
            for outcome in outcomes {
                self.write_outcome(outcome)?;
            }
        }
        self.write_progress(report)?;
        self.write_verdict(report)
    }

    /// Notice for a module filter that matched nothing.
    pub fn write_no_checks(&mut self, module: u32) -> io::Result<()> {
        self.styled(&scheme::warn(), &format!("  No graded checks for module {module}"))?;
        writeln!(self.out)
    }

    pub fn write_results_path(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "  Results written to {}", path.display())
    }

    fn write_module_header(&mut self, module: u32) -> io::Result<()> {
        let title = match module_title(module) {
            Some(title) => title.to_string(),
            None => format!("Module {module:02}"),
        };
        self.styled(&scheme::title(), &format!("  Module {module:02}: {title}"))?;
        writeln!(self.out)?;
        self.styled(&scheme::dim(), &format!("  {}", "─".repeat(RULE_WIDTH)))?;
        writeln!(self.out)
    }

    fn write_outcome(&mut self, outcome: &CheckOutcome) -> io::Result<()> {
        write!(self.out, "    ")?;
        if outcome.passed {
            self.styled(&scheme::pass(), "✓")?;
        } else {
            self.styled(&scheme::fail(), "✗")?;
        }
        write!(self.out, " {:.<NAME_WIDTH$} ", outcome.name)?;
        if outcome.passed {
            self.styled(&scheme::pass(), &format!("+{}pts", outcome.points))?;
        } else {
            self.styled(&scheme::dim(), &format!(" {}pts", outcome.points))?;
        }
        writeln!(self.out)?;
        if !outcome.passed {
            self.styled(&scheme::dim(), &format!("      └─ {}", outcome.message))?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_progress(&mut self, report: &Report) -> io::Result<()> {
        let percentage = report.percentage();
        let filled = filled_cells(report.earned_points, report.total_points) as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH as usize - filled));

        write!(self.out, "\n  Progress: ")?;
        self.styled(&scheme::progress(percentage), &bar)?;
        write!(self.out, " ")?;
        self.styled(
            &scheme::title(),
            &format!("{}/{}", report.earned_points, report.total_points),
        )?;
        writeln!(self.out, " ({percentage:.0}%)")?;
        writeln!(self.out)
    }

    fn write_verdict(&mut self, report: &Report) -> io::Result<()> {
        let required = self.policy.required_points(report.total_points);
        if self.policy.passed(report) {
            self.styled(
                &scheme::pass(),
                &format!(
                    "  🎉 PASSED! You scored {}/{} (need {required} to pass)",
                    report.earned_points, report.total_points
                ),
            )?;
        } else {
            self.styled(
                &scheme::warn(),
                &format!(
                    "  Keep going! You need {} more points to pass ({required}/{})",
                    self.policy.remaining(report),
                    report.total_points
                ),
            )?;
        }
        writeln!(self.out)?;
        writeln!(self.out)
    }

    fn styled(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }
}

/// Bar cells to fill, rounded down.
fn filled_cells(earned: u32, total: u32) -> u32 {
    if total == 0 { 0 } else { (BAR_WIDTH * earned / total).min(BAR_WIDTH) }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
