//! Formatter location, taken from the environment.

use crate::error::LaunchError;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable holding the styleguide checkout directory.
pub const FORMAT_DIR_VAR: &str = "FSAE_FORMAT";

/// Read the formatter directory from the process environment.
///
/// This is the only environment access the launcher performs; callers read it
/// once at startup and pass the value down.
#[must_use]
pub fn format_dir_from_env() -> Option<OsString> {
    std::env::var_os(FORMAT_DIR_VAR)
}

/// Turn the raw variable into a directory path.
/// An empty value counts as unset.
///
/// # Errors
///
/// Returns `LaunchError::MissingConfig` if the value is absent or empty.
pub fn resolve_format_dir(value: Option<OsString>) -> Result<PathBuf, LaunchError> {
    match value {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(LaunchError::MissingConfig {
            var: FORMAT_DIR_VAR,
        }),
    }
}
