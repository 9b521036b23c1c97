//! Shared unit test utilities.
//!
//! Provides project-tree helpers and a scripted engine for unit tests in
//! the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, TempDir};

use crate::artifact::Project;
use crate::check::CheckContext;
use crate::engine::{EngineProbe, ProbeError, ProbeResult};

/// Creates an empty temp project directory.
pub fn temp_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a temp project populated from (path, content) pairs.
pub fn temp_project_with(files: &[(&str, &str)]) -> TempDir {
    let dir = temp_project();
    create_tree(dir.path(), files);
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project();
/// create_tree(tmp.path(), &[
///     ("app/Dockerfile", "FROM node:18-alpine"),
///     ("docker-compose.yml", "services:\n"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Engine with canned answers.
#[derive(Debug, Clone)]
pub struct FakeEngine {
    pub build: ProbeResult<()>,
    pub images: ProbeResult<Vec<String>>,
    pub volumes: ProbeResult<Vec<String>>,
}

impl FakeEngine {
    /// An engine whose binary is missing.
    pub fn absent() -> Self {
        let missing = ProbeError::NotInstalled { program: "docker".to_string() };
        Self { build: Err(missing.clone()), images: Err(missing.clone()), volumes: Err(missing) }
    }

    /// A running engine with nothing on it.
    pub fn empty() -> Self {
        Self { build: Ok(()), images: Ok(Vec::new()), volumes: Ok(Vec::new()) }
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = Ok(images.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_volumes(mut self, volumes: &[&str]) -> Self {
        self.volumes = Ok(volumes.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_build(mut self, build: ProbeResult<()>) -> Self {
        self.build = build;
        self
    }
}

impl EngineProbe for FakeEngine {
    fn build(&self, _context: &Path, _tag: &str) -> ProbeResult<()> {
        self.build.clone()
    }

    fn list_images(&self) -> ProbeResult<Vec<String>> {
        self.images.clone()
    }

    fn list_volumes(&self) -> ProbeResult<Vec<String>> {
        self.volumes.clone()
    }
}

/// Run `f` with a context over `project` and `engine`.
pub fn with_context<T>(
    project: &Project,
    engine: &dyn EngineProbe,
    f: impl FnOnce(&CheckContext<'_>) -> T,
) -> T {
    let ctx = CheckContext { project, engine };
    f(&ctx)
}
