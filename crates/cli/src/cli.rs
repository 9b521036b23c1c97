//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::report::ThresholdMode;

/// Docker Zero-to-Hero Workshop Grader
#[derive(Debug, Parser)]
#[command(name = "dockgrade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root containing app/ and docker-compose.yml
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Check a specific module only (e.g., --module 4)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub module: Option<u32>,

    /// Also write results.json to the project root
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when the verdict fails or the module has no checks
    #[arg(long)]
    pub strict: bool,

    /// How the passing score is applied [default: absolute]
    #[arg(long, value_name = "MODE")]
    pub threshold: Option<ThresholdMode>,

    /// Container engine CLI to invoke [default: docker]
    #[arg(long, value_name = "PROGRAM", env = "DOCKGRADE_ENGINE")]
    pub engine: Option<String>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
