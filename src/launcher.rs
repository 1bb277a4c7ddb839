//! Planning the formatter invocation.
//!
//! `Launcher::plan` is pure: given the configured directory and the launcher's
//! own arguments it produces the exact child argument vector, without touching
//! the environment, the filesystem or any process.

use crate::config;
use crate::error::LaunchError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Interpreter used to run the formatter.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Formatter script inside the configured directory.
pub const ENTRY_FILE: &str = "format.py";

/// How to start the formatter: which interpreter, which script inside the
/// configured directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    interpreter: OsString,
    entry_file: PathBuf,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER, ENTRY_FILE)
    }
}

impl Launcher {
    #[must_use]
    pub fn new(interpreter: impl Into<OsString>, entry_file: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            entry_file: entry_file.into(),
        }
    }

    #[must_use]
    pub fn interpreter(&self) -> &OsStr {
        &self.interpreter
    }

    #[must_use]
    pub fn entry_file(&self) -> &Path {
        &self.entry_file
    }

    /// Build the child invocation from the configured directory and the
    /// arguments to forward.
    ///
    /// Arguments are forwarded in order and byte-for-byte; nothing is parsed,
    /// including `--` and `--help`.
    ///
    /// # Errors
    ///
    /// Returns `LaunchError::MissingConfig` if `format_dir` is unset or empty.
    pub fn plan<I, S>(
        &self,
        format_dir: Option<OsString>,
        args: I,
    ) -> Result<Invocation, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let dir = config::resolve_format_dir(format_dir)?;

        Ok(Invocation {
            program: self.interpreter.clone(),
            entry: dir.join(&self.entry_file),
            forwarded: args.into_iter().map(Into::into).collect(),
        })
    }
}

/// A fully planned child process: `<program> <entry> <forwarded...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    entry: PathBuf,
    forwarded: Vec<OsString>,
}

impl Invocation {
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Path of the formatter script handed to the interpreter.
    #[must_use]
    pub fn entry(&self) -> &Path {
        &self.entry
    }

    #[must_use]
    pub fn forwarded(&self) -> &[OsString] {
        &self.forwarded
    }

    /// The complete argument vector, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.forwarded.len() + 2);
        argv.push(self.program.clone());
        argv.push(self.entry.clone().into_os_string());
        argv.extend(self.forwarded.iter().cloned());
        argv
    }

    /// Build the `Command` for this invocation. The child sees exactly
    /// `argv()`; standard streams are inherited, never captured.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.entry)
            .args(&self.forwarded)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}
