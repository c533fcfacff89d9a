//! Release pipeline
//!
//! This module coordinates every step of a release run, in a fixed order:
//!
//! 1. Validate flag combinations (before any I/O)
//! 2. Bump the manifest version
//! 3. Promote the changelog `Unreleased` section (unless disabled)
//! 4. Resolve release notes
//! 5. Check the working tree is clean (when tagging)
//! 6. Create and push the release tag
//! 7. Build the archive
//! 8. Create the hosted release
//!
//! There is no rollback. Steps that talk to the outside world come after the
//! local ones, and the tag comes before the archive and the hosted release, so
//! an interrupted run can be finished by hand.
//!
//! In dry-run mode every mutating step logs what it would do instead.

use std::fmt;

use log::{info, warn};

use crate::changelog::{self, PromoteStatus};
use crate::config::ReleaseConfig;
use crate::context::{ReleaseContext, ReleaseOptions};
use crate::error::{Error, Result};
use crate::git;
use crate::github::HostedRelease;
use crate::manifest::{self, ManifestBump};
use crate::notes::{self, ReleaseNotes};
use crate::package::{self, PackageSummary};
use crate::process;
use crate::tools::ReleaseTools;

/// What happened to an optional step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not requested.
    Skipped,
    /// Requested, but only described because of dry-run.
    Planned,
    /// Performed.
    Done,
}

impl StepOutcome {
    fn performed(dry_run: bool) -> Self {
        if dry_run {
            StepOutcome::Planned
        } else {
            StepOutcome::Done
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepOutcome::Skipped => "skipped",
            StepOutcome::Planned => "planned",
            StepOutcome::Done => "done",
        })
    }
}

/// Outcome of every step of a release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub manifest: ManifestBump,
    /// `None` when promotion was disabled.
    pub promotion: Option<PromoteStatus>,
    pub notes: ReleaseNotes,
    pub tag: String,
    pub tag_created: StepOutcome,
    pub tag_pushed: StepOutcome,
    pub package: PackageSummary,
    pub hosted_release: StepOutcome,
    pub dry_run: bool,
}

/// Execute a release run.
pub fn execute_release(
    ctx: &ReleaseContext,
    options: &ReleaseOptions,
    config: &ReleaseConfig,
    tools: &ReleaseTools,
) -> Result<ReleaseReport> {
    options.validate()?;

    let dry_run = options.dry_run;
    info!("root: {}", ctx.root.display());
    info!("target version: {}", ctx.version);
    if dry_run {
        info!("dry-run enabled; no files will be written.");
    }

    let bump = manifest::bump_version(&config.manifest_path(&ctx.root), &ctx.version, dry_run)?;
    info!(
        "manifest version: {} -> {}",
        if bump.previous.is_empty() {
            "(unset)"
        } else {
            bump.previous.as_str()
        },
        bump.current
    );

    let changelog_path = config.changelog_path(&ctx.root);
    let promotion = if options.promote_unreleased {
        let status = changelog::promote_file(&changelog_path, &ctx.version, &ctx.iso_date(), dry_run)?;
        match status {
            PromoteStatus::Promoted | PromoteStatus::VersionAlreadyExists => {
                info!("changelog promote: {}", status)
            }
            _ => warn!("changelog promote: {}", status),
        }
        Some(status)
    } else {
        None
    };

    let notes = notes::resolve(ctx, options.notes_source, &changelog_path)?;
    info!("notes source: {}", notes.origin);

    let tag = options.tag_name(ctx);

    if options.create_tag && !dry_run && tools.vcs.has_uncommitted_changes()? {
        return Err(Error::DirtyWorkingTree);
    }

    let (tag_created, tag_pushed) = if options.create_tag {
        create_and_push_tag(ctx, options, config, tools, &tag)?
    } else {
        (StepOutcome::Skipped, StepOutcome::Skipped)
    };

    let zip_name = options
        .zip_name
        .clone()
        .unwrap_or_else(|| config.default_archive_name(&ctx.version));
    let package = package::build_archive(&ctx.root, config, &zip_name, dry_run)?;
    info!(
        "zip: {} ({}, {} files)",
        package::entry_name(&ctx.root, &package.path),
        if dry_run { "would be built" } else { "built" },
        package.entries.len()
    );

    let hosted_release = if options.create_gh_release {
        if !options.create_tag && !dry_run && !tools.vcs.tag_exists(&tag)? {
            return Err(Error::TagNotFound { tag });
        }

        let release = HostedRelease {
            tag: tag.clone(),
            title: options.release_title(ctx),
            notes: notes.text.clone(),
            draft: options.draft,
            prerelease: options.prerelease,
        };
        if dry_run {
            info!("dry-run: {}", release.describe());
        } else {
            tools.host.create_release(&release)?;
        }
        info!(
            "github release: {} ({})",
            tag,
            if dry_run { "would be created" } else { "created" }
        );
        StepOutcome::performed(dry_run)
    } else {
        StepOutcome::Skipped
    };

    Ok(ReleaseReport {
        manifest: bump,
        promotion,
        notes,
        tag,
        tag_created,
        tag_pushed,
        package,
        hosted_release,
        dry_run,
    })
}

fn create_and_push_tag(
    ctx: &ReleaseContext,
    options: &ReleaseOptions,
    config: &ReleaseConfig,
    tools: &ReleaseTools,
    tag: &str,
) -> Result<(StepOutcome, StepOutcome)> {
    let dry_run = options.dry_run;
    let message = git::tag_message(&ctx.version);

    if dry_run {
        info!("dry-run: {}", process::display("git", &git::tag_args(tag, &message)));
    } else {
        if tools.vcs.tag_exists(tag)? {
            return Err(Error::TagExists {
                tag: tag.to_string(),
            });
        }
        tools.vcs.create_tag(tag, &message)?;
    }
    info!(
        "git tag: {} ({})",
        tag,
        if dry_run { "would be created" } else { "created" }
    );

    if !options.push_tag {
        return Ok((StepOutcome::performed(dry_run), StepOutcome::Skipped));
    }

    if dry_run {
        info!(
            "dry-run: {}",
            process::display("git", &git::push_tag_args(&config.remote, tag))
        );
    } else {
        tools.vcs.push_tag(&config.remote, tag)?;
    }
    info!(
        "git tag push: {} ({})",
        tag,
        if dry_run { "would be pushed" } else { "pushed" }
    );

    Ok((StepOutcome::performed(dry_run), StepOutcome::performed(dry_run)))
}
