//! CLI argument parsing, logging setup and dispatch

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Bump the manifest version, promote the changelog Unreleased section,
/// build the extension zip, and optionally tag and publish a GitHub release.
#[derive(Parser, Debug)]
#[command(name = "extension-release")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    release: commands::release::ReleaseArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Execute the release
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        commands::release::execute(self.release, &self.color)
    }
}

/// Progress goes to stderr as `[release] ...`, filtered by `level`.
fn init_logging(level: &str) {
    env_logger::Builder::new()
        .parse_filters(level)
        .format(|buf, record| writeln!(buf, "[release] {}", record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}
