//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use commands::{dispatch, parse_invocation, Invocation, PROBLEM_MESSAGE};
pub use error::{CliError, CliResult};
