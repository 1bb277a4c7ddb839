//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path of the compiled launcher binary
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fsae-format"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write a `format.py` into a styleguide directory
pub fn create_entry_file(dir: &Path, content: &str) {
    fs::write(dir.join("format.py"), content).unwrap();
}

/// The launcher invokes plain `python`, so only that name counts
pub fn is_python_available() -> bool {
    which::which("python").is_ok()
}

/// Helper to create a Command for the launcher with `FSAE_FORMAT` cleared,
/// so the user's own setting never leaks into a test
pub fn launcher_command(binary: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env_remove("FSAE_FORMAT");
    cmd
}
