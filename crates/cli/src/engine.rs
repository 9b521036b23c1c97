//! Container engine probe.
//!
//! Wraps the three engine operations the rubric needs (build, list images,
//! list volumes). Every call is bounded by a timeout, and every failure mode
//! (engine missing, timeout, non-zero exit) comes back as a [`ProbeError`]
//! so callers can grade it instead of crashing.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default timeout for `build`.
pub const BUILD_TIMEOUT: Duration = Duration::from_secs(120);

/// Default timeout for list operations and image cleanup.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Diagnostics from the engine are cut to this many characters.
pub const DIAGNOSTIC_LIMIT: usize = 200;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Why an engine operation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// The engine binary could not be found.
    #[error("{program} is not installed or not in PATH")]
    NotInstalled { program: String },

    /// The operation ran past its deadline and was killed.
    #[error("{program} timed out after {secs}s")]
    TimedOut { program: String, secs: u64 },

    /// The engine exited non-zero. `stderr` is already truncated.
    #[error("{program} failed: {stderr}")]
    Failed { program: String, stderr: String },

    /// Spawning or waiting on the engine failed for another reason.
    #[error("could not run {program}: {message}")]
    Io { program: String, message: String },
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// Operations the rubric performs against a container engine.
pub trait EngineProbe {
    /// Build `context` as `tag`. A successful build removes the image again
    /// before returning; cleanup failure does not fail the build.
    fn build(&self, context: &Path, tag: &str) -> ProbeResult<()>;

    /// Local images as `repository:tag` strings.
    fn list_images(&self) -> ProbeResult<Vec<String>>;

    /// Local volume names.
    fn list_volumes(&self) -> ProbeResult<Vec<String>>;
}

/// [`EngineProbe`] backed by the `docker` CLI (or a compatible program).
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
    build_timeout: Duration,
    list_timeout: Duration,
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), build_timeout: BUILD_TIMEOUT, list_timeout: LIST_TIMEOUT }
    }

    pub fn with_timeouts(mut self, build: Duration, list: Duration) -> Self {
        self.build_timeout = build;
        self.list_timeout = list;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str], timeout: Duration) -> ProbeResult<String> {
        tracing::debug!("running {} {}", self.program, args.join(" "));
        let output = run_with_timeout(&self.program, args, timeout)?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(ProbeError::Failed {
                program: self.program.clone(),
                stderr: truncate_chars(&output.stderr, DIAGNOSTIC_LIMIT),
            })
        }
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new("docker")
    }
}

impl EngineProbe for DockerCli {
    fn build(&self, context: &Path, tag: &str) -> ProbeResult<()> {
        let context = context.to_string_lossy();
        self.run(&["build", "-t", tag, &context], self.build_timeout)?;

        if let Err(e) = self.run(&["rmi", tag], self.list_timeout) {
            tracing::debug!("failed to remove test image {}: {}", tag, e);
        }
        Ok(())
    }

    fn list_images(&self) -> ProbeResult<Vec<String>> {
        let stdout =
            self.run(&["images", "--format", "{{.Repository}}:{{.Tag}}"], self.list_timeout)?;
        Ok(non_empty_lines(&stdout))
    }

    fn list_volumes(&self) -> ProbeResult<Vec<String>> {
        let stdout = self.run(&["volume", "ls", "--format", "{{.Name}}"], self.list_timeout)?;
        Ok(non_empty_lines(&stdout))
    }
}

/// Captured result of a finished process.
#[derive(Debug)]
struct ProcessOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

/// Run `program` to completion or until `timeout` elapses.
///
/// Pipes are drained on helper threads so a chatty child cannot block on a
/// full pipe while we poll for its exit.
fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> ProbeResult<ProcessOutput> {
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ProbeError::NotInstalled { program: program.to_string() });
        }
        Err(e) => {
            return Err(ProbeError::Io { program: program.to_string(), message: e.to_string() });
        }
    };

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if started.elapsed() > timeout {
                    stop(&mut child);
                    tracing::warn!("{} timed out after {}s", program, timeout.as_secs());
                    return Err(ProbeError::TimedOut {
                        program: program.to_string(),
                        secs: timeout.as_secs(),
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                stop(&mut child);
                return Err(ProbeError::Io { program: program.to_string(), message: e.to_string() });
            }
        }
    };

    Ok(ProcessOutput {
        success: status.success(),
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
    })
}

/// Kill the child and reap it. Either step may fail if it already exited.
fn stop(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect()
}

/// Keep at most `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
