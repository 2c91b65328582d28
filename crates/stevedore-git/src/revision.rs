use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Suffix appended to the release tag when the working tree has
/// uncommitted changes.
pub const DIRTY_SUFFIX: &str = "-dirty";

/// Version-control state captured at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Abbreviated commit hash of HEAD.
    pub commit: String,
    /// Whether the working tree has uncommitted changes.
    pub dirty: bool,
}

impl Revision {
    /// Query git for the short HEAD hash and working-tree cleanliness.
    pub fn resolve(project_dir: &Path) -> Result<Self, GitError> {
        let commit = short_head(project_dir)?;
        let dirty = is_dirty(project_dir)?;
        Ok(Self { commit, dirty })
    }

    /// The tag this revision releases under: the short hash, suffixed
    /// with [`DIRTY_SUFFIX`] when the tree is dirty.
    pub fn release_tag(&self) -> String {
        if self.dirty {
            format!("{}{}", self.commit, DIRTY_SUFFIX)
        } else {
            self.commit.clone()
        }
    }
}

/// Returns the abbreviated hash of HEAD.
fn short_head(project_dir: &Path) -> Result<String, GitError> {
    let stdout = run_git(project_dir, &["rev-parse", "--short", "HEAD"])?;
    let commit = stdout.trim().to_owned();
    if commit.is_empty() {
        return Err(GitError::Failed {
            detail: "git rev-parse returned no commit — does the repository have any commits?"
                .to_owned(),
        });
    }
    Ok(commit)
}

/// Checks whether the git working tree has uncommitted changes.
pub fn is_dirty(project_dir: &Path) -> Result<bool, GitError> {
    let stdout = run_git(project_dir, &["status", "--porcelain"])?;
    Ok(!stdout.is_empty())
}

/// Whether the directory is inside a git working tree. Used by doctor;
/// a failing or missing git both report as `false`.
pub fn is_inside_work_tree(project_dir: &Path) -> bool {
    run_git(project_dir, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out.trim() == "true")
        .unwrap_or(false)
}

/// The installed git version line, e.g. `git version 2.47.0`.
pub fn git_version() -> Result<String, GitError> {
    let stdout = run_git(Path::new("."), &["--version"])?;
    Ok(stdout.trim().to_owned())
}

fn run_git(project_dir: &Path, args: &[&str]) -> Result<String, GitError> {
    debug!(?args, "git exec");
    let output = Command::new("git")
        .args(args)
        .current_dir(project_dir)
        .output()
        .map_err(|e| GitError::Spawn {
            detail: format!("failed to execute git {}", args.join(" ")),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::Failed {
            detail: format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            ),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| GitError::InvalidUtf8 { source: e })
}

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git command failed: {detail}")]
    Spawn {
        detail: String,
        source: std::io::Error,
    },

    #[error("git failed: {detail}")]
    Failed { detail: String },

    #[error("git output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}
