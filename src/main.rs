//! # fsae-format
//!
//! Runs the Formula Slug styleguide formatter with the arguments given here.
//!
//! ## Usage
//!
//! Point `FSAE_FORMAT` at a styleguide checkout, then call the launcher as you
//! would call `format.py` directly:
//!
//! ```text
//! FSAE_FORMAT="$HOME/styleguide" fsae-format
//! ```
//!
//! The launcher recognizes no flags of its own; `--help` goes to the formatter.

/// Entry point for the CLI tool.
fn main() {
    fsae_format::cli::run_cli();
}
