//! Launch failures and the exit codes they map to.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code when the formatter directory is not configured.
pub const EXIT_MISSING_CONFIG: i32 = 1;
/// Exit code when the interpreter or entry file cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code when the child exists but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Everything that stops the formatter from being started.
///
/// A formatter that starts and then exits non-zero is not a `LaunchError`;
/// its exit code is passed through untouched.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{var} environment variable not set")]
    MissingConfig { var: &'static str },

    #[error("interpreter '{interpreter}' not found on PATH: {source}")]
    InterpreterNotFound {
        interpreter: String,
        #[source]
        source: which::Error,
    },

    #[error("formatter entry point '{}' does not exist", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Process exit code reported for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfig { .. } => EXIT_MISSING_CONFIG,
            Self::InterpreterNotFound { .. } | Self::EntryNotFound { .. } => EXIT_NOT_FOUND,
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::Spawn { .. } => EXIT_CANNOT_EXECUTE,
        }
    }
}
