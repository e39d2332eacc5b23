//! CLI argument definitions using clap

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

/// List MBTA subway lines and the stops along a line
#[derive(Parser, Debug)]
#[command(name = "mbta")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Operands are captured verbatim and arity-checked by the dispatcher.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all subway lines (ID and name)
    #[command(disable_help_flag = true)]
    ListLines {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        operands: Vec<String>,
    },

    /// List the stops of a line in travel order (line IDs are case-sensitive)
    #[command(disable_help_flag = true)]
    ListStops {
        /// Line ID, e.g. Red or Green-B
        #[arg(
            value_name = "LINE_ID",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        operands: Vec<String>,
    },
}

impl Commands {
    /// Sub-command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::ListLines { .. } => "list-lines",
            Commands::ListStops { .. } => "list-stops",
        }
    }
}

/// Rendered help text used for every usage message.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
