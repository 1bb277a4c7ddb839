//! # fsae-format
//!
//! Runs the Formula Slug styleguide formatter. The styleguide checkout is
//! located through the `FSAE_FORMAT` environment variable, and every argument
//! is forwarded untouched to `python $FSAE_FORMAT/format.py`.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod launcher;

/// Print an error message and exit with the given code.
pub fn fatal_error(message: &str, code: i32) -> ! {
    eprintln!("{message}");
    std::process::exit(code);
}
