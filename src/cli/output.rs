//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
//! Everything goes to the given writer; write failures are logged, not raised.

use std::io::Write;

use colored::Colorize;
use tracing::warn;

fn write_line(out: &mut dyn Write, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        warn!("cannot write output: {}", e);
    }
}

/// Print error (red bold "error:" prefix)
pub fn error(out: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    write_line(out, format_args!("{}: {}", "error".red().bold(), msg));
}

/// Print warning (yellow "Warning:" prefix)
pub fn warning(out: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    write_line(out, format_args!("{}: {}", "Warning".yellow(), msg));
}

/// Print plain output (no color)
pub fn info(out: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) {
    write_line(out, format_args!("{}", msg));
}

/// Print usage text, trailing newline trimmed
pub fn usage(out: &mut dyn Write, text: &str) {
    write_line(out, format_args!("{}", text.trim_end()));
}
