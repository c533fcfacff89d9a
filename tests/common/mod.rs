//! Shared fixtures for CLI end-to-end tests.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = ExtensionFixture::new().with_default_layout();
//! fixture.command().arg("1.1.0").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::fixtures;
    pub use super::ExtensionFixture;
}

/// Project file contents.
#[allow(dead_code)]
pub mod fixtures {
    pub const MANIFEST: &str = r#"{
  "manifest_version": 3,
  "name": "Turtle Neck Reminder",
  "version": "1.0.1",
  "action": {
    "default_popup": "popup.html"
  }
}
"#;

    pub const CHANGELOG: &str = r#"# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

### Added
- Giraffe reminder images.

### Fixed
- Popup no longer flickers.

## [1.0.1] - 2024-01-20

### Fixed
- Alarm interval.
"#;

    pub const EMPTY_UNRELEASED: &str = "# Changelog\n\n## [Unreleased]\n\n## [1.0.1] - 2024-01-20\n\n- Alarm interval.\n";

    /// Every file packaged by default, relative to the project root.
    pub const DEFAULT_FILES: &[&str] = &[
        "manifest.json",
        "background.js",
        "popup.html",
        "popup.js",
        "style.css",
        "images/neck_no.png",
        "images/neck_long.png",
        "images/giraffe_no.png",
        "images/giraffe_long.png",
    ];
}

/// A temporary extension project.
pub struct ExtensionFixture {
    temp_dir: assert_fs::TempDir,
}

impl ExtensionFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Manifest, changelog, every default package file and one locale.
    pub fn with_default_layout(self) -> Self {
        let fixture = self
            .with_file("CHANGELOG.md", fixtures::CHANGELOG)
            .with_file("_locales/en/messages.json", "{}\n")
            .with_file("_locales/ko/messages.json", "{}\n")
            .with_file("README.md", "not packaged\n");
        fixtures::DEFAULT_FILES
            .iter()
            .fold(fixture, |fixture, path| match *path {
                "manifest.json" => fixture.with_file(path, fixtures::MANIFEST),
                _ => fixture.with_file(path, "content\n"),
            })
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    #[allow(dead_code)]
    pub fn without_file(self, path: &str) -> Self {
        std::fs::remove_file(self.path().join(path)).expect("Failed to remove file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// The binary, rooted at the fixture, with a fixed release date and no color.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("extension-release");
        cmd.current_dir(self.path())
            .env_remove("EXTENSION_RELEASE_ROOT")
            .env_remove("EXTENSION_RELEASE_CONFIG")
            .args(["--date", "2024-02-03", "--color", "never"]);
        cmd
    }

    /// Turn the fixture into a git repository with everything committed.
    #[allow(dead_code)]
    pub fn init_git(&self) {
        for args in [
            &["init", "--quiet"][..],
            &["config", "user.name", "Release Bot"],
            &["config", "user.email", "release@example.com"],
            &["config", "commit.gpgsign", "false"],
            &["config", "tag.gpgsign", "false"],
            &["add", "."],
            &["commit", "--quiet", "-m", "initial"],
        ] {
            self.git(args);
        }
    }

    #[allow(dead_code)]
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

impl Default for ExtensionFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `git` can be run.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
