//! Changelog section handling
//!
//! This module works on "Keep a Changelog" style documents, where every
//! release is a level-2 heading of the form `## [<version>] - <date>` and
//! pending changes collect under a single `## [Unreleased]` heading.
//!
//! ## Operations
//!
//! - **Promotion**: move the body of `## [Unreleased]` under a new dated
//!   heading for the release version, leaving an empty `## [Unreleased]`
//!   section above it.
//! - **Extraction**: return the section of an existing version, heading
//!   included, for use as release notes.
//!
//! Headings are matched line by line: a heading only counts when `## [` starts
//! a line. The first matching heading wins.
//!
//! The text-level functions ([`promote`], [`extract_section`],
//! [`collapse_blank_lines`]) are pure; [`promote_file`] and [`read_section`]
//! add the file handling on top.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Heading of the pending-changes section.
pub const UNRELEASED_HEADING: &str = "## [Unreleased]";

static UNRELEASED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[Unreleased\]\s*$").expect("valid regex"));

static ANY_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## \[[^\n]+\][^\n]*$").expect("valid regex"));

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Result of a promotion attempt.
///
/// Only [`PromoteStatus::Promoted`] changes the document; every other status
/// leaves it byte-for-byte untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoteStatus {
    Promoted,
    MissingChangelog,
    MissingUnreleased,
    VersionAlreadyExists,
    EmptyUnreleased,
}

impl PromoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoteStatus::Promoted => "promoted",
            PromoteStatus::MissingChangelog => "missing-changelog",
            PromoteStatus::MissingUnreleased => "missing-unreleased",
            PromoteStatus::VersionAlreadyExists => "version-already-exists",
            PromoteStatus::EmptyUnreleased => "empty-unreleased",
        }
    }
}

impl fmt::Display for PromoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A promotion result together with the document to persist, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub status: PromoteStatus,
    /// The rewritten document; `Some` only when `status` is `Promoted`.
    pub updated: Option<String>,
}

impl Promotion {
    fn unchanged(status: PromoteStatus) -> Self {
        Self {
            status,
            updated: None,
        }
    }
}

/// Byte range of a heading line, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeadingSpan {
    start: usize,
    end: usize,
}

fn find_version_heading(text: &str, version: &str) -> Result<Option<HeadingSpan>> {
    let pattern = format!(r"(?m)^## \[{}\][^\n]*$", regex::escape(version));
    let re = Regex::new(&pattern)?;
    Ok(re.find(text).map(|m| HeadingSpan {
        start: m.start(),
        end: m.end(),
    }))
}

/// Absolute offset of the first heading at or after `from`, or the end of `text`.
fn next_heading_or_end(text: &str, from: usize) -> usize {
    ANY_HEADING_RE
        .find(&text[from..])
        .map(|m| from + m.start())
        .unwrap_or(text.len())
}

/// Locate the Unreleased section: `(heading_start, section_end, body)`.
fn split_unreleased(text: &str) -> Option<(usize, usize, &str)> {
    let heading = UNRELEASED_RE.find(text)?;
    let body_start = heading.end();
    let section_end = next_heading_or_end(text, body_start);
    Some((heading.start(), section_end, &text[body_start..section_end]))
}

/// Collapse every run of three or more newlines into exactly two.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

/// The heading line for a released version.
pub fn version_heading(version: &str, iso_date: &str) -> String {
    format!("## [{}] - {}", version, iso_date)
}

/// Promote the Unreleased section of `text` to `version`, dated `iso_date`.
pub fn promote(text: &str, version: &str, iso_date: &str) -> Result<Promotion> {
    let Some((unreleased_start, section_end, body)) = split_unreleased(text) else {
        return Ok(Promotion::unchanged(PromoteStatus::MissingUnreleased));
    };

    if find_version_heading(text, version)?.is_some() {
        return Ok(Promotion::unchanged(PromoteStatus::VersionAlreadyExists));
    }

    if body.trim().is_empty() {
        return Ok(Promotion::unchanged(PromoteStatus::EmptyUnreleased));
    }

    let block = format!(
        "{}\n\n{}{}\n\n",
        UNRELEASED_HEADING,
        version_heading(version, iso_date),
        body.trim_end()
    );

    let mut updated = String::with_capacity(text.len() + block.len());
    updated.push_str(&text[..unreleased_start]);
    updated.push_str(&block);
    updated.push_str(&text[section_end..]);

    Ok(Promotion {
        status: PromoteStatus::Promoted,
        updated: Some(collapse_blank_lines(&updated)),
    })
}

/// Return the section for `version`, heading included, trimmed and
/// newline-terminated. `None` when the heading is absent or the section is
/// blank.
pub fn extract_section(text: &str, version: &str) -> Result<Option<String>> {
    let Some(heading) = find_version_heading(text, version)? else {
        return Ok(None);
    };

    let end = next_heading_or_end(text, heading.end);
    let section = text[heading.start..end].trim();
    if section.is_empty() {
        return Ok(None);
    }

    Ok(Some(format!("{}\n", section)))
}

/// Promote the Unreleased section of the changelog at `path`.
///
/// The file is rewritten only on [`PromoteStatus::Promoted`] and only when
/// `dry_run` is not set.
pub fn promote_file(path: &Path, version: &str, iso_date: &str, dry_run: bool) -> Result<PromoteStatus> {
    if !path.is_file() {
        return Ok(PromoteStatus::MissingChangelog);
    }

    let text = fs::read_to_string(path)?;
    let promotion = promote(&text, version, iso_date)?;

    if let Some(updated) = promotion.updated {
        if dry_run {
            log::debug!("dry-run: not writing {}", path.display());
        } else {
            fs::write(path, updated)?;
        }
    }

    Ok(promotion.status)
}

/// Read the section for `version` from the changelog at `path`, if any.
pub fn read_section(path: &Path, version: &str) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }

    let text = fs::read_to_string(path)?;
    extract_section(&text, version)
}
