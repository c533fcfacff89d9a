//! # Release Configuration
//!
//! This module defines the project layout used by a release run: where the
//! manifest and changelog live, which files make up the package, how the
//! archive is named and which remote tags are pushed to.
//!
//! Every setting has a default (see [`crate::defaults`]). A project may
//! override any subset of them in a `.release.yaml` file at its root, or in a
//! file passed with `--config`:
//!
//! ```yaml
//! archive-prefix: my-extension
//! include-files:
//!   - manifest.json
//!   - background.js
//! include-dirs:
//!   - _locales
//!   - icons
//! remote: upstream
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};

/// Project layout for a release run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Manifest path, relative to the project root.
    pub manifest: PathBuf,
    /// Changelog path, relative to the project root.
    pub changelog: PathBuf,
    /// Prefix for the default archive name.
    pub archive_prefix: String,
    /// Files that must exist and are always packaged.
    pub include_files: Vec<PathBuf>,
    /// Directories whose files are packaged recursively, when present.
    pub include_dirs: Vec<PathBuf>,
    /// Git remote that tags are pushed to.
    pub remote: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(defaults::MANIFEST_FILE),
            changelog: PathBuf::from(defaults::CHANGELOG_FILE),
            archive_prefix: defaults::ARCHIVE_PREFIX.to_string(),
            include_files: defaults::INCLUDE_FILES.iter().map(PathBuf::from).collect(),
            include_dirs: defaults::INCLUDE_DIRS.iter().map(PathBuf::from).collect(),
            remote: defaults::REMOTE.to_string(),
        }
    }
}

impl ReleaseConfig {
    /// Absolute manifest path under `root`.
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    /// Absolute changelog path under `root`.
    pub fn changelog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.changelog)
    }

    /// Archive name used when `--zip-name` is not given.
    pub fn default_archive_name(&self, version: &str) -> String {
        defaults::archive_name(&self.archive_prefix, version)
    }
}

/// Parse a YAML configuration string.
///
/// An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<ReleaseConfig> {
    if yaml_content.trim().is_empty() {
        return Ok(ReleaseConfig::default());
    }

    serde_yaml::from_str::<ReleaseConfig>(yaml_content).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("unknown field") {
            Some(
                "Valid keys are: manifest, changelog, archive-prefix, include-files, \
                 include-dirs, remote"
                    .to_string(),
            )
        } else {
            None
        };
        Error::ConfigParse { message, hint }
    })
}

/// Read and parse a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ReleaseConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Resolve the configuration for a project.
///
/// An explicit path must exist. Without one, `<root>/.release.yaml` is used
/// when present, and the defaults otherwise.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<ReleaseConfig> {
    match explicit {
        Some(path) => from_file(path),
        None => {
            let candidate = root.join(defaults::CONFIG_FILE);
            if candidate.is_file() {
                log::debug!("using configuration file {}", candidate.display());
                from_file(candidate)
            } else {
                Ok(ReleaseConfig::default())
            }
        }
    }
}
