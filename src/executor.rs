//! Starting the formatter and waiting for it.

use crate::error::LaunchError;
use crate::launcher::Invocation;
use std::process::ExitStatus;

/// Exit code used when the child ended without a code or signal we can report.
const EXIT_UNKNOWN: i32 = 1;

/// Offset added to a terminating signal number, as shells do.
#[cfg(unix)]
const SIGNAL_EXIT_BASE: i32 = 128;

/// Run the planned invocation to completion and return the exit code the
/// launcher should report.
///
/// The interpreter is looked up on `PATH` once and the entry file must exist;
/// neither is retried or substituted. The wait has no timeout.
///
/// # Errors
///
/// Returns `Err` if:
/// - The interpreter is not on `PATH`
/// - The formatter entry file does not exist
/// - The child process could not be started
pub fn run(invocation: &Invocation) -> Result<i32, LaunchError> {
    let interpreter = invocation.program().to_string_lossy().into_owned();

    // Lookup only diagnoses a missing interpreter; the child keeps the planned argv[0]
    if let Err(source) = which::which(invocation.program()) {
        return Err(LaunchError::InterpreterNotFound {
            interpreter,
            source,
        });
    }

    if !invocation.entry().is_file() {
        return Err(LaunchError::EntryNotFound {
            path: invocation.entry().to_path_buf(),
        });
    }

    let status = invocation
        .command()
        .status()
        .map_err(|source| LaunchError::Spawn {
            program: interpreter,
            source,
        })?;

    Ok(exit_code(status))
}

/// Map a child's exit status to the launcher's own exit code.
///
/// Normal exits pass through verbatim. On Unix a child killed by signal `S`
/// maps to `128 + S`.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    EXIT_UNKNOWN
}
