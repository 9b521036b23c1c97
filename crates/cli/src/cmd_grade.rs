//! The grading command: load config, run the rubric, print, and decide the
//! exit status.

use std::io::IsTerminal;

use anyhow::Context;
use termcolor::StandardStream;

use dockgrade::artifact::Project;
use dockgrade::check::CheckContext;
use dockgrade::checks::workshop_registry;
use dockgrade::cli::Cli;
use dockgrade::color::resolve_color;
use dockgrade::config::{CONFIG_FILE, Config};
use dockgrade::error::{Error, ExitCode};
use dockgrade::report::{JsonFormatter, TextFormatter};
use dockgrade::runner::{CheckRunner, RunnerConfig};

/// Grade the project at `args.path`.
///
/// Errors are configuration or output failures; a failing verdict is an
/// exit code, not an error.
pub fn run(args: &Cli) -> anyhow::Result<ExitCode> {
    let root = std::path::absolute(&args.path)
        .with_context(|| format!("cannot resolve {}", args.path.display()))?;

    let mut config = Config::load_for_project(&root)?;
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(program) = &args.engine {
        config.engine.program.clone_from(program);
    }
    config.validate(&root.join(CONFIG_FILE))?;
    let policy = config.pass_policy();
    let engine = config.engine();
    let project = Project::new(&root);
    let registry = workshop_registry();
    tracing::debug!(root = %root.display(), engine = engine.program(), "grading");

    let no_color = args.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let stdout = StandardStream::stdout(resolve_color(
        args.color,
        no_color,
        std::io::stdout().is_terminal(),
    ));
    let mut out = TextFormatter::new(stdout.lock(), policy);
    out.write_header()?;

    let ctx = CheckContext { project: &project, engine: &engine };
    let runner = CheckRunner::new(RunnerConfig { module: args.module });
    let report = match runner.run(&registry, &ctx) {
        Ok(report) => report,
        Err(Error::NoChecksForModule(module)) => {
            out.write_no_checks(module)?;
            return Ok(if args.strict { ExitCode::NoChecks } else { ExitCode::Success });
        }
        Err(err) => return Err(err.into()),
    };

    out.write_report(&report)?;
    if args.json {
        let path = JsonFormatter::new(policy).write(&root, &report)?;
        out.write_results_path(&path)?;
    }

    if args.strict && !policy.passed(&report) {
        Ok(ExitCode::CheckFailed)
    } else {
        Ok(ExitCode::Success)
    }
}
