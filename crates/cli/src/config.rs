//! Optional `dockgrade.toml` configuration.
//!
//! Every key is optional; CLI flags override whatever is loaded here.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::engine::{BUILD_TIMEOUT, DockerCli, LIST_TIMEOUT};
use crate::error::{Error, Result};
use crate::report::{DEFAULT_PASSING_SCORE, PassPolicy, ThresholdMode};

/// Config file name, looked up at the project root.
pub const CONFIG_FILE: &str = "dockgrade.toml";

/// Upper bound of `passing_score` with `threshold = "fraction"`.
pub const MAX_PERCENT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Points (or percent, with `threshold = "fraction"`) needed to pass.
    pub passing_score: u32,

    pub threshold: ThresholdMode,

    pub engine: EngineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            passing_score: DEFAULT_PASSING_SCORE,
            threshold: ThresholdMode::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// Container engine invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Engine CLI to spawn.
    pub program: String,
    pub build_timeout_secs: u64,
    pub list_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            build_timeout_secs: BUILD_TIMEOUT.as_secs(),
            list_timeout_secs: LIST_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
        config.validate(path)?;
        Ok(config)
    }

    /// A fractional passing score is a percentage and must not exceed 100.
    ///
    /// Call again after command-line overrides change the threshold mode.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.threshold == ThresholdMode::Fraction && self.passing_score > MAX_PERCENT {
            return Err(Error::ConfigInvalid {
                path: path.to_path_buf(),
                message: format!(
                    "passing_score {} exceeds {MAX_PERCENT} with threshold \"fraction\"",
                    self.passing_score
                ),
            });
        }
        Ok(())
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
        Self::parse(&content, path)
    }

    /// Load [`CONFIG_FILE`] from `root`, or defaults when there is none.
    pub fn load_for_project(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn pass_policy(&self) -> PassPolicy {
        PassPolicy { passing_score: self.passing_score, mode: self.threshold }
    }

    pub fn engine(&self) -> DockerCli {
        DockerCli::new(&self.engine.program).with_timeouts(
            Duration::from_secs(self.engine.build_timeout_secs),
            Duration::from_secs(self.engine.list_timeout_secs),
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
