//! External command execution.
//!
//! Thin wrappers over `std::process::Command` that turn spawn failures and
//! non-zero exits into [`Error`] values carrying the full command line.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Render `program args...` for messages, quoting arguments with whitespace.
pub fn display(program: &str, args: &[String]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|arg| {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                format!("{:?}", arg)
            } else {
                arg.clone()
            }
        }))
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_error(program: &str, args: &[String], e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::ToolNotFound {
            tool: program.to_string(),
        }
    } else {
        Error::Spawn {
            command: display(program, args),
            source: e,
        }
    }
}

/// Run a command with inherited stdout/stderr and require success.
pub fn run(program: &str, args: &[String], dir: &Path) -> Result<()> {
    log::debug!("running: {}", display(program, args));

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| spawn_error(program, args, e))?;

    if !status.success() {
        return Err(Error::CommandFailed {
            command: display(program, args),
            exit_code: status.code(),
        });
    }

    Ok(())
}

/// Run a command with captured output, whatever its exit status.
pub fn capture(program: &str, args: &[String], dir: &Path) -> Result<Output> {
    log::debug!("running: {}", display(program, args));

    Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| spawn_error(program, args, e))
}

/// Run a command with captured output and require success.
pub fn capture_success(program: &str, args: &[String], dir: &Path) -> Result<Output> {
    let output = capture(program, args, dir)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            log::error!("{}", stderr.trim_end());
        }
        return Err(Error::CommandFailed {
            command: display(program, args),
            exit_code: output.status.code(),
        });
    }
    Ok(output)
}

/// Convert a list of string slices into owned arguments.
pub fn args<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
