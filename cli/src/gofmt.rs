#![deny(missing_docs)]

//! # gofmt
//!
//! Formats generated files with `gofmt -w` when the tool is installed.
//! Generated code is already formatted, so a missing `gofmt` only logs a warning.

use crate::error::{CliError, CliResult};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};
use tracing::{debug, warn};

/// Interface for executing an external command.
///
/// Abstracted so tests can run without a Go toolchain.
pub trait CommandExecutor {
    /// Executes the command and returns the output.
    fn execute(&self, program: &str, args: &[&str]) -> std::io::Result<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> std::io::Result<Output> {
        Command::new(program).args(args).output()
    }
}

/// Runs `gofmt -w` over `paths`.
///
/// Returns `false` when `gofmt` is not installed.
pub fn format_files<E: CommandExecutor>(paths: &[&Path], executor: &E) -> CliResult<bool> {
    if paths.is_empty() {
        return Ok(true);
    }

    let names: Vec<String> = paths.iter().map(|p| p.to_string_lossy().into_owned()).collect();
    let mut args = vec!["-w"];
    args.extend(names.iter().map(String::as_str));

    let output = match executor.execute("gofmt", &args) {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("gofmt not found, leaving generated files unformatted");
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::General(format!(
            "gofmt failed with status {}: {}",
            output.status, stderr
        )));
    }

    debug!(files = paths.len(), "formatted with gofmt");
    Ok(true)
}
