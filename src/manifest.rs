//! Manifest version bump.
//!
//! The extension manifest is a JSON object. Only its `version` field is
//! touched; every other key is preserved in its original order.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use semver::Version;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Outcome of a version bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestBump {
    /// Version before the bump, empty when the field was absent.
    pub previous: String,
    pub current: String,
}

/// Load the manifest as a JSON object.
pub fn load(path: &Path) -> Result<Map<String, Value>> {
    if !path.is_file() {
        return Err(Error::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::ManifestInvalid {
            path: path.to_path_buf(),
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// Render the manifest with 2-space indentation and a trailing newline.
pub fn render(manifest: &Map<String, Value>) -> Result<String> {
    let mut text = serde_json::to_string_pretty(manifest)?;
    text.push('\n');
    Ok(text)
}

/// Set the manifest `version` to `version`, returning the previous value.
///
/// Nothing is written when `dry_run` is set.
pub fn bump_version(path: &Path, version: &str, dry_run: bool) -> Result<ManifestBump> {
    let mut manifest = load(path)?;

    let previous = match manifest.get("version") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    warn_if_not_newer(&previous, version);

    manifest.insert("version".to_string(), Value::String(version.to_string()));

    if dry_run {
        debug!("dry-run: not writing {}", path.display());
    } else {
        fs::write(path, render(&manifest)?)?;
    }

    Ok(ManifestBump {
        previous,
        current: version.to_string(),
    })
}

fn warn_if_not_newer(previous: &str, next: &str) {
    if let (Ok(prev), Ok(next_version)) = (Version::parse(previous), Version::parse(next)) {
        if next_version <= prev {
            warn!(
                "target version {} is not greater than current manifest version {}",
                next, previous
            );
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
