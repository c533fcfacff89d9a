//! GitHub release creation via the `gh` CLI.

use std::path::Path;

use crate::error::Result;
use crate::process;

const GH: &str = "gh";

/// A hosted release to create for an existing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedRelease {
    pub tag: String,
    pub title: String,
    pub notes: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl HostedRelease {
    /// Arguments for `gh release create`.
    pub fn args(&self) -> Vec<String> {
        let mut args = process::args([
            "release",
            "create",
            self.tag.as_str(),
            "--title",
            self.title.as_str(),
            "--notes",
            self.notes.as_str(),
        ]);
        if self.draft {
            args.push("--draft".to_string());
        }
        if self.prerelease {
            args.push("--prerelease".to_string());
        }
        args
    }

    /// Command line for logs, with the notes body elided.
    pub fn describe(&self) -> String {
        let mut args = self.args();
        if let Some(notes) = args.iter_mut().skip_while(|a| a.as_str() != "--notes").nth(1) {
            *notes = format!("<{} bytes>", self.notes.len());
        }
        process::display(GH, &args)
    }
}

/// Create the release with `gh release create`.
pub fn create_release(repo_dir: &Path, release: &HostedRelease) -> Result<()> {
    process::run(GH, &release.args(), repo_dir)
}
