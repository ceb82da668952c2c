//! Staged file discovery.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use super::GaddError;

/// Extension of the files the pipeline checks.
pub const PYTHON_EXTENSION: &str = ".py";

/// Source of the paths staged for the next commit.
pub trait StagedPathLister {
    /// Repository-relative paths in the index that differ from HEAD.
    fn staged_files(&self) -> Result<Vec<String>, GaddError>;
}

/// Lists staged paths with `git diff --name-only --cached`.
pub struct GitStagedLister {
    repo_path: PathBuf,
}

impl GitStagedLister {
    /// Create a lister for the repository containing `repo_path`.
    pub fn new(repo_path: &Path) -> Self {
        Self {
            repo_path: repo_path.to_path_buf(),
        }
    }
}

impl StagedPathLister for GitStagedLister {
    fn staged_files(&self) -> Result<Vec<String>, GaddError> {
        let output = Command::new("git")
            .args(["diff", "--name-only", "--cached"])
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GaddError::Git(format!("Failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(GaddError::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let files: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        debug!(count = files.len(), "Listed staged files");
        Ok(files)
    }
}

/// Keep only Python sources, preserving order.
pub fn python_source_files(files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|f| f.ends_with(PYTHON_EXTENSION))
        .cloned()
        .collect()
}
