//! Release context and options.
//!
//! A release run is described by two immutable values built once from the
//! command line: [`ReleaseContext`] (what is being released, when, and where)
//! and [`ReleaseOptions`] (which steps to perform and how).

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::defaults;
use crate::error::{Error, Result};
use crate::notes::NotesSource;

/// What is being released, on which date, from which project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    pub version: String,
    pub today: NaiveDate,
    pub root: PathBuf,
}

impl ReleaseContext {
    pub fn new(version: impl Into<String>, today: NaiveDate, root: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            today,
            root: root.into(),
        }
    }

    /// Context dated with the local calendar day.
    pub fn today(version: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self::new(version, chrono::Local::now().date_naive(), root)
    }

    /// The release date as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }
}

/// Step selection and naming for a release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOptions {
    /// Archive file name; `None` uses the configured default.
    pub zip_name: Option<String>,
    pub notes_source: NotesSource,
    pub promote_unreleased: bool,
    pub create_gh_release: bool,
    pub create_tag: bool,
    pub push_tag: bool,
    /// Tag name; `None` means `v<version>`.
    pub tag: Option<String>,
    /// Release title; `None` means the tag name.
    pub title: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub dry_run: bool,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            zip_name: None,
            notes_source: NotesSource::Changelog,
            promote_unreleased: true,
            create_gh_release: false,
            create_tag: false,
            push_tag: false,
            tag: None,
            title: None,
            draft: false,
            prerelease: false,
            dry_run: false,
        }
    }
}

impl ReleaseOptions {
    /// Reject flag combinations that can never produce a consistent release.
    ///
    /// Called before any file or repository is touched.
    pub fn validate(&self) -> Result<()> {
        if self.push_tag && !self.create_tag {
            return Err(Error::InvalidArguments {
                message: "--push-tag requires --create-tag.".to_string(),
            });
        }

        if self.create_gh_release && self.create_tag && !self.push_tag {
            return Err(Error::InvalidArguments {
                message: "--create-gh-release with --create-tag requires --push-tag.".to_string(),
            });
        }

        Ok(())
    }

    pub fn tag_name(&self, ctx: &ReleaseContext) -> String {
        self.tag
            .clone()
            .unwrap_or_else(|| defaults::tag_name(&ctx.version))
    }

    pub fn release_title(&self, ctx: &ReleaseContext) -> String {
        self.title.clone().unwrap_or_else(|| self.tag_name(ctx))
    }
}
