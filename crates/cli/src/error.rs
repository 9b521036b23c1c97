//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors surfaced at the library boundary.
///
/// Check evaluation never produces these: artifact absence and engine
/// failures are folded into failed check results instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    ConfigInvalid { path: PathBuf, message: String },

    /// A module filter matched nothing in the registry.
    #[error("no graded checks for module {0}")]
    NoChecksForModule(u32),

    #[error("failed to write results to {}: {source}", path.display())]
    WriteResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Grading completed (and, with `--strict`, the verdict passed).
    Success = 0,
    /// `--strict` and the verdict failed.
    CheckFailed = 1,
    /// `--strict` and the module filter matched no checks.
    NoChecks = 2,
    /// Configuration could not be loaded, or output could not be written.
    ConfigError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
