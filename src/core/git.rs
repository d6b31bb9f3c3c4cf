use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Produces diff text by shelling out to the `git` CLI, the same tool the
/// surrounding CI job already depends on.
pub struct DiffSource {
    repo_path: PathBuf,
}

impl DiffSource {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Unified diff between two commits with zero lines of context.
    pub fn diff_between(&self, base: &str, head: &str) -> Result<String> {
        let output = Command::new("git")
            .args(["diff", "--unified=0", base, head])
            .current_dir(&self.repo_path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git diff failed: {}", stderr.trim());
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
