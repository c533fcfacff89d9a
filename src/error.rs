//! # Error Handling
//!
//! This module defines the centralized error type for the `extension-release`
//! library. It uses `thiserror` to build a single `Error` enum covering every
//! fatal condition of a release run, each with enough context to tell the
//! operator what went wrong and which file or command triggered it.
//!
//! ## Taxonomy
//!
//! - **Missing inputs**: the manifest or a required package file is absent.
//!   These are raised before anything is written.
//! - **Invalid arguments**: flag combinations that can never succeed. Raised
//!   before any I/O.
//! - **Repository state**: dirty working tree, tag already present, tag absent.
//! - **External tools**: `git` or `gh` missing from `PATH`, or exiting with a
//!   non-zero status. The triggering command line is always carried along.
//! - **Wrapped library errors**: I/O, JSON, YAML, regex, directory walking and
//!   zip writing.
//!
//! Non-fatal changelog conditions (no `Unreleased` section, empty section,
//! version already present) are *not* errors; see
//! [`crate::changelog::PromoteStatus`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for release operations
#[derive(Error, Debug)]
pub enum Error {
    /// The extension manifest could not be found.
    #[error("manifest.json not found at {}", path.display())]
    ManifestNotFound { path: PathBuf },

    /// The manifest exists but is not a JSON object.
    #[error("Invalid manifest at {}: {message}", path.display())]
    ManifestInvalid { path: PathBuf, message: String },

    /// One or more required package files are absent.
    ///
    /// Every missing path is listed, relative to the project root.
    #[error("Required package files are missing: {}", missing.join(", "))]
    MissingPackageFiles { missing: Vec<String> },

    /// A combination of command-line flags that cannot be honoured.
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// An error occurred while parsing the project configuration file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Tag creation was requested but the working tree has uncommitted changes.
    #[error("Working tree is dirty. Commit changes before creating a tag.")]
    DirtyWorkingTree,

    /// The tag to create is already present in the local repository.
    #[error("git tag already exists locally: {tag}")]
    TagExists { tag: String },

    /// A hosted release was requested for a tag that does not exist.
    #[error("Tag does not exist locally: {tag}. Create/push tag first.")]
    TagNotFound { tag: String },

    /// An external executable is not on `PATH`.
    #[error("{tool} is not installed or not in PATH.")]
    ToolNotFound { tool: String },

    /// An external executable was found but could not be started.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// An external command ran but reported failure.
    #[error("command failed: {command}{}", exit_code.map(|c| format!(" (exit code: {})", c)).unwrap_or_default())]
    CommandFailed {
        command: String,
        /// `None` when the process was terminated by a signal
        exit_code: Option<i32>,
    },

    /// An error occurred while writing the release archive.
    #[error("Archive error for {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A directory traversal error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// A zip writer error, wrapped from `zip::result::ZipError`.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_manifest_not_found() {
        let error = Error::ManifestNotFound {
            path: PathBuf::from("/project/manifest.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("manifest.json not found"));
        assert!(display.contains("/project/manifest.json"));
    }

    #[test]
    fn test_error_display_missing_package_files_lists_all() {
        let error = Error::MissingPackageFiles {
            missing: vec!["popup.js".to_string(), "images/neck_no.png".to_string()],
        };
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Required package files are missing: popup.js, images/neck_no.png"
        );
    }

    #[test]
    fn test_error_display_config_parse_with_hint() {
        let error = Error::ConfigParse {
            message: "unknown field `includes`".to_string(),
            hint: Some("Did you mean `include-files`?".to_string()),
        };
        let display = format!("{}", error);
        assert!(display.contains("Configuration parsing error"));
        assert!(display.contains("hint:"));
        assert!(display.contains("include-files"));
    }

    #[test]
    fn test_error_display_command_failed_with_exit_code() {
        let error = Error::CommandFailed {
            command: "git push origin v1.0.0".to_string(),
            exit_code: Some(128),
        };
        let display = format!("{}", error);
        assert_eq!(
            display,
            "command failed: git push origin v1.0.0 (exit code: 128)"
        );
    }

    #[test]
    fn test_error_display_command_failed_without_exit_code() {
        let error = Error::CommandFailed {
            command: "gh release create v1.0.0".to_string(),
            exit_code: None,
        };
        let display = format!("{}", error);
        assert_eq!(display, "command failed: gh release create v1.0.0");
    }

    #[test]
    fn test_error_display_tool_not_found() {
        let error = Error::ToolNotFound {
            tool: "gh".to_string(),
        };
        assert_eq!(format!("{}", error), "gh is not installed or not in PATH.");
    }

    #[test]
    fn test_error_display_tag_not_found() {
        let error = Error::TagNotFound {
            tag: "v2.0.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("v2.0.0"));
        assert!(display.contains("Create/push tag first"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ broken").unwrap_err();
        let error: Error = json_error.into();
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: [unclosed").unwrap_err();
        let error: Error = yaml_error.into();
        assert!(format!("{}", error).contains("YAML parsing error"));
    }
}
