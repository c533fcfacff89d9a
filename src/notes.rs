//! Release notes resolution.
//!
//! Notes come either from the changelog section of the released version or
//! from a fixed template. A changelog lookup that finds nothing falls back to
//! the template and says so through [`NotesOrigin::TemplateFallback`].

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::changelog;
use crate::context::ReleaseContext;
use crate::error::Result;

/// Where the operator asked notes to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotesSource {
    /// The `## [<version>]` section of the changelog
    Changelog,
    /// A placeholder template
    Template,
}

/// Where the resolved notes actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesOrigin {
    Changelog,
    Template,
    TemplateFallback,
}

impl fmt::Display for NotesOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotesOrigin::Changelog => "changelog",
            NotesOrigin::Template => "template",
            NotesOrigin::TemplateFallback => "template-fallback",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub text: String,
    pub origin: NotesOrigin,
}

/// Placeholder notes for `ctx`.
pub fn template(ctx: &ReleaseContext) -> String {
    format!(
        "{}\n### Added\n- 변경사항을 CHANGELOG.md의 [Unreleased] 섹션에 먼저 작성하세요.\n",
        changelog::version_heading(&ctx.version, &ctx.iso_date())
    )
}

/// Resolve the notes for `ctx` from `source`.
pub fn resolve(ctx: &ReleaseContext, source: NotesSource, changelog_path: &Path) -> Result<ReleaseNotes> {
    if source == NotesSource::Template {
        return Ok(ReleaseNotes {
            text: template(ctx),
            origin: NotesOrigin::Template,
        });
    }

    match changelog::read_section(changelog_path, &ctx.version)? {
        Some(text) => Ok(ReleaseNotes {
            text,
            origin: NotesOrigin::Changelog,
        }),
        None => {
            log::warn!(
                "no [{}] section in {}; using template notes",
                ctx.version,
                changelog_path.display()
            );
            Ok(ReleaseNotes {
                text: template(ctx),
                origin: NotesOrigin::TemplateFallback,
            })
        }
    }
}
