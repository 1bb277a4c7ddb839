//! Process entry point: reads the environment and argv once, then launches.

use crate::config;
use crate::error::LaunchError;
use crate::executor;
use crate::launcher::Launcher;
use std::ffi::OsString;

/// Plan and run the formatter, returning the exit code to report.
///
/// # Errors
///
/// Returns `Err` if the formatter directory is not configured or the child
/// could not be started. A child that runs and fails is `Ok` with its code.
pub fn launch<I, S>(
    launcher: &Launcher,
    format_dir: Option<OsString>,
    args: I,
) -> Result<i32, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let invocation = launcher.plan(format_dir, args)?;
    executor::run(&invocation)
}

/// Main CLI logic. Never returns: the process exits with the formatter's
/// status, or with the launch error's code after printing it once.
pub fn run_cli() -> ! {
    let format_dir = config::format_dir_from_env();
    let args = std::env::args_os().skip(1);

    match launch(&Launcher::default(), format_dir, args) {
        Ok(code) => std::process::exit(code),
        Err(err) => crate::fatal_error(&format!("Error: {err}"), err.exit_code()),
    }
}
