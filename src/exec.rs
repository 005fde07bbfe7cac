//! Generator command execution.
//!
//! Splits a command line on whitespace and runs it as a child process that
//! inherits the parent's standard streams, blocking until it exits. There is
//! no quoting or escaping: an argument cannot contain a space.

use crate::error::ExecError;
use std::process::Command;

/// Execute `command_line`, passing `vars` to the child on top of the
/// inherited environment.
///
/// The first whitespace-separated token is the program, the rest are its
/// arguments. An empty or whitespace-only command fails before any process
/// is created.
pub fn execute(command_line: &str, vars: &[(&str, &str)]) -> Result<(), ExecError> {
    let mut tokens = command_line.split_whitespace();
    let program = tokens.next().ok_or(ExecError::EmptyCommand)?;

    let status = Command::new(program)
        .args(tokens)
        .envs(vars.iter().copied())
        .status()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ExecError::Failed { status })
    }
}
