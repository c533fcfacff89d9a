//! # Console Output
//!
//! Controls how the release summary looks on the terminal: colored status
//! markers when the terminal supports them, plain bracketed labels otherwise.
//!
//! The choice follows the `--color=always|never|auto` flag. In `auto` mode
//! these environment variables are honored:
//! - `NO_COLOR` (any value) disables color
//! - `CLICOLOR=0` disables color
//! - `CLICOLOR_FORCE=1` forces color even without a TTY
//! - `TERM=dumb` disables color
//!
//! ```rust,ignore
//! use extension_release::output::{marker, OutputConfig, Marker};
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} zip built", marker(&out, Marker::Done));
//! ```

use std::env;

use console::style;

use crate::changelog::PromoteStatus;
use crate::pipeline::{ReleaseReport, StepOutcome};

/// Output configuration for colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve the `--color` flag value ("always", "never" or "auto").
    ///
    /// `always` overrides `NO_COLOR`. Unknown values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Status marker kinds used in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Done,
    Planned,
    Skipped,
    Warn,
    Info,
}

/// The marker text for `kind`: an emoji with color, a bracketed label without.
pub fn marker(config: &OutputConfig, kind: Marker) -> String {
    if !config.use_color {
        return match kind {
            Marker::Done => "[OK]",
            Marker::Planned => "[PLAN]",
            Marker::Skipped => "[SKIP]",
            Marker::Warn => "[WARN]",
            Marker::Info => "[INFO]",
        }
        .to_string();
    }

    match kind {
        Marker::Done => style("✅").green().to_string(),
        Marker::Planned => style("🔎").cyan().to_string(),
        Marker::Skipped => style("⏭️").dim().to_string(),
        Marker::Warn => style("⚠️").yellow().to_string(),
        Marker::Info => style("📦").to_string(),
    }
}

fn outcome_marker(config: &OutputConfig, outcome: StepOutcome) -> String {
    marker(
        config,
        match outcome {
            StepOutcome::Done => Marker::Done,
            StepOutcome::Planned => Marker::Planned,
            StepOutcome::Skipped => Marker::Skipped,
        },
    )
}

/// Summary lines for a finished run, one per step.
pub fn summary_lines(config: &OutputConfig, report: &ReleaseReport) -> Vec<String> {
    let mut lines = Vec::new();

    let previous = if report.manifest.previous.is_empty() {
        "(unset)"
    } else {
        report.manifest.previous.as_str()
    };
    lines.push(format!(
        "{} manifest version: {} -> {}",
        marker(config, Marker::Info),
        previous,
        report.manifest.current
    ));

    match report.promotion {
        Some(PromoteStatus::Promoted) => lines.push(format!(
            "{} changelog promote: promoted",
            marker(config, Marker::Done)
        )),
        Some(status) => lines.push(format!(
            "{} changelog promote: {}",
            marker(config, Marker::Warn),
            status
        )),
        None => lines.push(format!(
            "{} changelog promote: disabled",
            marker(config, Marker::Skipped)
        )),
    }

    lines.push(format!(
        "{} notes source: {}",
        marker(config, Marker::Info),
        report.notes.origin
    ));
    lines.push(format!(
        "{} git tag {}: {}",
        outcome_marker(config, report.tag_created),
        report.tag,
        report.tag_created
    ));
    lines.push(format!(
        "{} git tag push: {}",
        outcome_marker(config, report.tag_pushed),
        report.tag_pushed
    ));

    let zip_name = report
        .package
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    lines.push(format!(
        "{} zip {}: {} ({} files)",
        marker(
            config,
            if report.package.written {
                Marker::Done
            } else {
                Marker::Planned
            }
        ),
        zip_name,
        if report.package.written {
            "built"
        } else {
            "planned"
        },
        report.package.entries.len()
    ));
    lines.push(format!(
        "{} github release: {}",
        outcome_marker(config, report.hosted_release),
        report.hosted_release
    ));

    lines
}
