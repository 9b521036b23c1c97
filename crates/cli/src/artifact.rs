//! Artifact reader for the learner's project tree.
//!
//! The layout is fixed relative to the project root. A missing or unreadable
//! file reads as empty text, so a missing Dockerfile and an empty one grade
//! the same way. [`Project::exists`] is the separate existence probe for the
//! few checks that need to tell them apart.

use std::fs;
use std::path::{Path, PathBuf};

/// A file in the learner's project that checks inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Dockerfile,
    DockerIgnore,
    Compose,
    PackageManifest,
    IndexHtml,
}

impl Artifact {
    /// Path relative to the project root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Artifact::Dockerfile => "app/Dockerfile",
            Artifact::DockerIgnore => "app/.dockerignore",
            Artifact::Compose => "docker-compose.yml",
            Artifact::PackageManifest => "app/package.json",
            Artifact::IndexHtml => "app/src/static/index.html",
        }
    }
}

/// The learner's project, rooted at a directory.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The application directory, which is also the image build context.
    pub fn app_dir(&self) -> PathBuf {
        self.root.join("app")
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.relative_path())
    }

    /// Full text of an artifact, or empty text if it cannot be read.
    pub fn read(&self, artifact: Artifact) -> String {
        read_text(&self.path(artifact))
    }

    /// Whether the artifact exists as a regular file.
    pub fn exists(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }
}

/// Read a file as text, returning empty text on any failure.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        },
        Err(e) => {
            tracing::debug!("cannot read {}: {}", path.display(), e);
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
