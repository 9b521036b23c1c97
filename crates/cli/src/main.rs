use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dockgrade::cli::Cli;
use dockgrade::error::ExitCode;

mod cmd_grade;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_grade::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("dockgrade: {err:#}");
            ExitCode::ConfigError.into()
        }
    }
}

/// `DOCKGRADE_LOG` takes precedence; otherwise `warn`, or `debug` with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("DOCKGRADE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());
    tracing_subscriber::registry().with(layer).with(filter).init();
}
