//! # Extension Release CLI
//!
//! Binary entry point for the `extension-release` command-line tool.
//!
//! It parses the command line with `clap`, sets up logging, and hands off to
//! the release command. All release logic lives in the library crate; errors
//! surface through `anyhow` as `Error: ...` with exit code 1.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
