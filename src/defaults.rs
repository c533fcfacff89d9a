//! Default values for release configuration.
//!
//! This module provides centralized default values used by the configuration
//! layer and the CLI, ensuring consistency and avoiding duplication.

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Changelog file name, relative to the project root.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Project configuration file looked up in the project root.
pub const CONFIG_FILE: &str = ".release.yaml";

/// Prefix of the default archive name (`<prefix>-<version>.zip`).
pub const ARCHIVE_PREFIX: &str = "turtle-neck-reminder";

/// Remote that release tags are pushed to.
pub const REMOTE: &str = "origin";

/// Runtime files the extension package cannot ship without.
pub const INCLUDE_FILES: &[&str] = &[
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

/// Directories packaged in full when present.
pub const INCLUDE_DIRS: &[&str] = &["_locales"];

/// Returns the default archive file name for `version`.
pub fn archive_name(prefix: &str, version: &str) -> String {
    format!("{}-{}.zip", prefix, version)
}

/// Returns the default tag name for `version`.
pub fn tag_name(version: &str) -> String {
    format!("v{}", version)
}
