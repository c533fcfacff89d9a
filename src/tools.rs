//! # External Release Tools
//!
//! This module provides `ReleaseTools`, the handle through which a release run
//! talks to version control and to the release host. It separates the release
//! pipeline from the concrete commands through two traits:
//!
//! - **`VcsOperations`**: tag queries, tag creation and push, and the
//!   dirty-working-tree check.
//!
//! - **`ReleaseHostOperations`**: creation of a hosted release with notes.
//!
//! In the application, `SystemGit` and `GhCli` are used, which wrap the
//! `git` and `gh` executables. In tests these are replaced with recording
//! mocks, so every precondition and the exact order of external calls can be
//! checked without a repository or network access.

use std::path::PathBuf;

use crate::error::Result;
use crate::git;
use crate::github::{self, HostedRelease};

/// Version-control operations used by a release.
pub trait VcsOperations {
    /// Whether `tag` exists locally.
    fn tag_exists(&self, tag: &str) -> Result<bool>;

    /// Whether tracked files have staged or unstaged changes.
    fn has_uncommitted_changes(&self) -> Result<bool>;

    /// Create an annotated tag at `HEAD`.
    fn create_tag(&self, tag: &str, message: &str) -> Result<()>;

    /// Push `tag` to `remote`.
    fn push_tag(&self, remote: &str, tag: &str) -> Result<()>;
}

/// Release hosting operations.
pub trait ReleaseHostOperations {
    fn create_release(&self, release: &HostedRelease) -> Result<()>;
}

/// `VcsOperations` backed by the system `git` command.
pub struct SystemGit {
    repo_dir: PathBuf,
}

impl SystemGit {
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }
}

impl VcsOperations for SystemGit {
    fn tag_exists(&self, tag: &str) -> Result<bool> {
        git::tag_exists(&self.repo_dir, tag)
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        git::has_uncommitted_changes(&self.repo_dir)
    }

    fn create_tag(&self, tag: &str, message: &str) -> Result<()> {
        git::create_tag(&self.repo_dir, tag, message)
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        git::push_tag(&self.repo_dir, remote, tag)
    }
}

/// `ReleaseHostOperations` backed by the GitHub CLI.
pub struct GhCli {
    repo_dir: PathBuf,
}

impl GhCli {
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }
}

impl ReleaseHostOperations for GhCli {
    fn create_release(&self, release: &HostedRelease) -> Result<()> {
        github::create_release(&self.repo_dir, release)
    }
}

/// The external tools a release run uses.
pub struct ReleaseTools {
    pub(crate) vcs: Box<dyn VcsOperations>,
    pub(crate) host: Box<dyn ReleaseHostOperations>,
}

impl ReleaseTools {
    /// Tools running `git` and `gh` inside `repo_dir`.
    pub fn new(repo_dir: PathBuf) -> Self {
        Self {
            vcs: Box::new(SystemGit::new(repo_dir.clone())),
            host: Box::new(GhCli::new(repo_dir)),
        }
    }

    /// Tools with custom implementations.
    ///
    /// This is primarily used for testing to inject mock operations.
    #[cfg(test)]
    pub fn with_operations(
        vcs: Box<dyn VcsOperations>,
        host: Box<dyn ReleaseHostOperations>,
    ) -> Self {
        Self { vcs, host }
    }
}
