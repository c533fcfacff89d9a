//! # Release Command Implementation
//!
//! Turns the parsed command line into a release run: resolves the project
//! root and its `.release.yaml`, builds the release context and options, runs
//! the pipeline against the system `git` and `gh`, and prints a summary.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

use extension_release::config;
use extension_release::context::{ReleaseContext, ReleaseOptions};
use extension_release::notes::NotesSource;
use extension_release::output::{marker, summary_lines, Marker, OutputConfig};
use extension_release::pipeline;
use extension_release::tools::ReleaseTools;

/// Arguments for a release run
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Release version (e.g. 1.0.2)
    #[arg(id = "target_version", value_name = "VERSION")]
    pub version: String,

    /// Override zip filename (default: <archive-prefix>-<version>.zip)
    #[arg(long, value_name = "NAME")]
    pub zip_name: Option<String>,

    /// Release notes source; 'changelog' reads the ## [<version>] section
    #[arg(long, value_enum, default_value_t = NotesSource::Changelog)]
    pub notes_source: NotesSource,

    /// Do not move the changelog Unreleased content under the version heading
    #[arg(long)]
    pub no_promote_unreleased: bool,

    /// Create a GitHub release via 'gh release create'
    #[arg(long)]
    pub create_gh_release: bool,

    /// Create an annotated git tag for this release
    #[arg(long)]
    pub create_tag: bool,

    /// Push the created tag to the remote; requires --create-tag
    #[arg(long)]
    pub push_tag: bool,

    /// Tag name (default: v<version>)
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Title for the GitHub release (default: the tag name)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Create the GitHub release as a draft
    #[arg(long)]
    pub draft: bool,

    /// Mark the GitHub release as a prerelease
    #[arg(long)]
    pub prerelease: bool,

    /// Show what would change without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "EXTENSION_RELEASE_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to a release config file (default: <root>/.release.yaml if present)
    #[arg(short, long, value_name = "FILE", env = "EXTENSION_RELEASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Release date for the changelog heading (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl ReleaseArgs {
    fn options(&self) -> ReleaseOptions {
        ReleaseOptions {
            zip_name: self.zip_name.clone(),
            notes_source: self.notes_source,
            promote_unreleased: !self.no_promote_unreleased,
            create_gh_release: self.create_gh_release,
            create_tag: self.create_tag,
            push_tag: self.push_tag,
            tag: self.tag.clone(),
            title: self.title.clone(),
            draft: self.draft,
            prerelease: self.prerelease,
            dry_run: self.dry_run,
        }
    }
}

/// Execute a release run.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ReleaseArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        anyhow::bail!("Project root not found: {}", root.display());
    }

    let config = config::load(&root, args.config.as_deref())?;
    let ctx = match args.date {
        Some(date) => ReleaseContext::new(args.version.clone(), date, root.clone()),
        None => ReleaseContext::today(args.version.clone(), root.clone()),
    };
    let options = args.options();
    let tools = ReleaseTools::new(root);

    let report = pipeline::execute_release(&ctx, &options, &config, &tools)?;

    for line in summary_lines(&out, &report) {
        println!("{}", line);
    }
    if report.dry_run {
        println!("{} dry run: no files were written", marker(&out, Marker::Planned));
    }
    println!(
        "{} next steps: review, then git add/commit/tag/push.",
        marker(&out, Marker::Info)
    );

    Ok(())
}
