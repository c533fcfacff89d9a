//! # Extension Release Library
//!
//! Core functionality behind the `extension-release` command-line tool, which
//! cuts a release of a browser extension project: it bumps the version in
//! `manifest.json`, promotes the changelog `Unreleased` section, builds the
//! distributable zip, and optionally tags the commit and publishes a GitHub
//! release.
//!
//! ## Quick Example
//!
//! ```
//! use extension_release::changelog::{self, PromoteStatus};
//!
//! let text = "# Changelog\n\n## [Unreleased]\n\n- Giraffe mode.\n";
//! let promotion = changelog::promote(text, "1.1.0", "2024-02-03").unwrap();
//! assert_eq!(promotion.status, PromoteStatus::Promoted);
//!
//! let notes = changelog::extract_section(&promotion.updated.unwrap(), "1.1.0").unwrap();
//! assert_eq!(notes.as_deref(), Some("## [1.1.0] - 2024-02-03\n- Giraffe mode.\n"));
//! ```
//!
//! ## Modules
//!
//! - **Inputs (`context`, `config`, `defaults`)**: the target version and
//!   date, the operator's flags, and the project layout (file allowlist,
//!   archive prefix, remote), optionally read from `.release.yaml`.
//! - **Documents (`manifest`, `changelog`, `notes`)**: the manifest version
//!   bump, the Keep a Changelog promotion, and release-notes resolution.
//! - **Packaging (`package`)**: the allowlisted zip archive.
//! - **External tools (`process`, `git`, `github`, `tools`)**: `git` and `gh`
//!   invocations behind the `VcsOperations` and `ReleaseHostOperations`
//!   traits, so the pipeline can run against mocks.
//! - **Orchestration (`pipeline`)**: `execute_release` runs every step in
//!   order and returns a `ReleaseReport`.
//! - **Presentation (`output`)**: color-aware summary lines.

pub mod changelog;
pub mod config;
pub mod context;
pub mod defaults;
pub mod error;
pub mod git;
pub mod github;
pub mod manifest;
pub mod notes;
pub mod output;
pub mod package;
pub mod pipeline;
pub mod process;
pub mod tools;

#[cfg(test)]
mod changelog_proptest;
