//! Package assembly
//!
//! Builds the distributable zip archive from the configured allowlist.
//!
//! ## Process
//!
//! 1.  **Validate**: every required file must exist as a regular file. Missing
//!     files are reported together, before anything is written.
//!
//! 2.  **Expand**: each included directory is walked recursively (following
//!     symlinks, sorted by file name). Directories that do not exist are
//!     skipped.
//!
//! 3.  **Deduplicate**: paths are deduplicated, keeping the first occurrence,
//!     so a required file that also lives in an included directory is
//!     packaged once, at its required-file position.
//!
//! 4.  **Write**: each file is stored deflate-compressed under its
//!     `/`-separated path relative to the project root.
//!
//! In dry-run mode steps 1-3 still run, so a missing file fails the preview
//! exactly as it would fail the real run.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::ReleaseConfig;
use crate::error::{Error, Result};

/// The archive a run produced, or would produce in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Absolute path of the archive.
    pub path: PathBuf,
    /// Entry names, in archive order.
    pub entries: Vec<String>,
    /// Whether the archive was written.
    pub written: bool,
}

/// Archive entry name for `path`: relative to `root`, `/`-separated.
pub fn entry_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn expand_dirs(root: &Path, dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for rel_path in dirs {
        let abs_path = root.join(rel_path);
        if !abs_path.exists() {
            log::debug!("skipping missing directory {}", rel_path.display());
            continue;
        }
        if abs_path.is_file() {
            files.push(abs_path);
            continue;
        }

        for entry in WalkDir::new(&abs_path).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

fn unique_paths(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Compute the ordered, deduplicated list of files to package.
///
/// Fails with [`Error::MissingPackageFiles`] listing every absent required file.
pub fn collect_files(root: &Path, config: &ReleaseConfig) -> Result<Vec<PathBuf>> {
    let required: Vec<PathBuf> = config
        .include_files
        .iter()
        .map(|rel_path| root.join(rel_path))
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|path| !path.is_file())
        .map(|path| entry_name(root, path))
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingPackageFiles { missing });
    }

    let extra = expand_dirs(root, &config.include_dirs)?;
    Ok(unique_paths(required.into_iter().chain(extra)))
}

fn write_archive(root: &Path, zip_path: &Path, files: &[PathBuf]) -> Result<()> {
    let file = fs::File::create(zip_path).map_err(|e| Error::Archive {
        path: zip_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        writer.start_file(entry_name(root, path), options)?;
        let mut source = fs::File::open(path)?;
        io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

/// Build the release archive `zip_name` under `root`.
///
/// Nothing is written when `dry_run` is set, but the file list is still
/// computed and validated.
pub fn build_archive(
    root: &Path,
    config: &ReleaseConfig,
    zip_name: &str,
    dry_run: bool,
) -> Result<PackageSummary> {
    let zip_path = root.join(zip_name);
    let files: Vec<PathBuf> = collect_files(root, config)?
        .into_iter()
        .filter(|path| path != &zip_path)
        .collect();
    let entries = files.iter().map(|path| entry_name(root, path)).collect();

    if dry_run {
        log::debug!("dry-run: not writing {}", zip_path.display());
    } else {
        write_archive(root, &zip_path, &files)?;
    }

    Ok(PackageSummary {
        path: zip_path,
        entries,
        written: !dry_run,
    })
}
