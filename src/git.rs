//! Git operations for release tagging.
//!
//! These use the system `git` command, so signing keys, credential helpers
//! and any authentication configured in `~/.gitconfig` apply unchanged.
//! All commands run with the project root as the working directory.

use std::path::Path;

use crate::error::{Error, Result};
use crate::process;

const GIT: &str = "git";

/// Arguments for creating an annotated tag.
pub fn tag_args(tag: &str, message: &str) -> Vec<String> {
    process::args(["tag", "-a", tag, "-m", message])
}

/// Arguments for pushing a single tag.
pub fn push_tag_args(remote: &str, tag: &str) -> Vec<String> {
    process::args(["push", remote, tag])
}

/// Annotation used for release tags.
pub fn tag_message(version: &str) -> String {
    format!("Release {}", version)
}

/// Whether `tag` exists in the local repository.
pub fn tag_exists(repo_dir: &Path, tag: &str) -> Result<bool> {
    let output = process::capture_success(GIT, &process::args(["tag", "--list", tag]), repo_dir)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.split_whitespace().any(|line| line == tag))
}

/// Exit code of `git diff --quiet`-style commands: 0 clean, 1 changes.
fn diff_is_dirty(repo_dir: &Path, args: Vec<String>) -> Result<bool> {
    let output = process::capture(GIT, &args, repo_dir)?;
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        code => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                log::error!("{}", stderr.trim_end());
            }
            Err(Error::CommandFailed {
                command: process::display(GIT, &args),
                exit_code: code,
            })
        }
    }
}

/// Whether tracked files have unstaged or staged changes.
pub fn has_uncommitted_changes(repo_dir: &Path) -> Result<bool> {
    let unstaged = diff_is_dirty(repo_dir, process::args(["diff", "--quiet"]))?;
    let staged = diff_is_dirty(repo_dir, process::args(["diff", "--cached", "--quiet"]))?;
    Ok(unstaged || staged)
}

/// Create an annotated tag at `HEAD`.
pub fn create_tag(repo_dir: &Path, tag: &str, message: &str) -> Result<()> {
    process::run(GIT, &tag_args(tag, message), repo_dir)
}

/// Push `tag` to `remote`.
pub fn push_tag(repo_dir: &Path, remote: &str, tag: &str) -> Result<()> {
    process::run(GIT, &push_tag_args(remote, tag), repo_dir)
}
