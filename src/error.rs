//! Error types for directive discovery and generator execution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from launching or waiting on a generator command.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator exited with {status}")]
    Failed { status: std::process::ExitStatus },
}

/// Why a walk aborted.
#[derive(Debug, Error)]
pub enum WalkErrorKind {
    #[error("directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read directive from {}: {source}", path.display())]
    Directive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute {command} ({}): {source}", path.display())]
    Generator {
        command: String,
        path: PathBuf,
        #[source]
        source: ExecError,
    },
}

/// A walk that aborted before completing the traversal.
///
/// Carries the number of generators that ran successfully before the failure
/// so callers can report partial progress.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct WalkError {
    /// Generators executed strictly before the failure, in traversal order.
    pub executed: usize,
    pub kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(executed: usize, kind: WalkErrorKind) -> Self {
        Self { executed, kind }
    }
}

/// Configuration and logging setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Invalid(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
