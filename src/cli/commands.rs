//! Command dispatch: argument vector in, exit status out

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, instrument};

use crate::cli::args::{usage, Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::Outcome;
use crate::exitcode::ExitStatus;
use crate::infrastructure::di::ServiceContainer;

/// Printed whenever the service cannot be reached or answers with an error.
pub const PROBLEM_MESSAGE: &str = "Problem getting data... contact support.";

/// A validated invocation, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    ListLines,
    ListStops { line_id: String },
}

/// Parse the full argument vector (program name first) into an invocation.
///
/// Arity is checked here, so a malformed command line never reaches the network.
/// Operands are counted on the raw tokens, since clap swallows a bare `--`.
pub fn parse_invocation<I, T>(args: I) -> CliResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let tokens: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // program name and sub-command precede the operands
    let raw_operands = tokens.len().saturating_sub(2);

    let cli = match Cli::try_parse_from(&tokens) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => return Ok(Invocation::Help),
        Err(e) => {
            debug!("parse error: {}", e);
            return Err(CliError::Usage(
                e.kind()
                    .as_str()
                    .unwrap_or("unrecognized arguments")
                    .to_string(),
            ));
        }
    };

    match cli.command {
        None => Err(CliError::MissingCommand),
        Some(Commands::ListLines { operands }) if operands.is_empty() && raw_operands == 0 => {
            Ok(Invocation::ListLines)
        }
        Some(Commands::ListLines { .. }) => Err(CliError::InvalidArgs(
            "list-lines has no parameters".to_string(),
        )),
        Some(Commands::ListStops { mut operands })
            if operands.len() == 1 && raw_operands == 1 =>
        {
            Ok(Invocation::ListStops {
                line_id: operands.remove(0),
            })
        }
        Some(Commands::ListStops { .. }) => Err(CliError::InvalidArgs(
            "list-stops requires a single parameter: the line ID".to_string(),
        )),
    }
}

/// Run one invocation end to end and reduce it to an exit status.
///
/// All output (data, notices and usage) is written to `out`.
#[instrument(skip_all)]
pub fn dispatch<I, T>(args: I, container: &ServiceContainer, out: &mut dyn Write) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = match parse_invocation(args) {
        Ok(invocation) => invocation,
        Err(e) => {
            debug!("rejected invocation: {:?}", e);
            output::error(out, &e);
            output::usage(out, &usage());
            return e.exit_status();
        }
    };
    debug!("invocation: {:?}", invocation);

    match invocation {
        Invocation::Help => {
            output::usage(out, &usage());
            ExitStatus::Success
        }
        Invocation::ListLines => _list_lines(container, out),
        Invocation::ListStops { line_id } => _list_stops(container, &line_id, out),
    }
}

fn _list_lines(container: &ServiceContainer, out: &mut dyn Write) -> ExitStatus {
    let url = &container.settings.endpoints.list_lines_url;
    let outcome = container.query.list_lines(url, out);
    match &outcome {
        Outcome::Success(_) => {}
        Outcome::EmptySuccess => output::warning(out, "the service returned no lines"),
        Outcome::TransportFailure => output::info(out, PROBLEM_MESSAGE),
    }
    outcome.exit_status()
}

fn _list_stops(container: &ServiceContainer, line_id: &str, out: &mut dyn Write) -> ExitStatus {
    let url = &container.settings.endpoints.list_stops_url;
    let outcome = container.query.list_stops(url, line_id, out);
    match &outcome {
        Outcome::Success(_) => {}
        Outcome::EmptySuccess => output::warning(
            out,
            &format!(
                "no stops found for line '{}'; line IDs are case-sensitive (see list-lines)",
                line_id
            ),
        ),
        Outcome::TransportFailure => output::info(out, PROBLEM_MESSAGE),
    }
    outcome.exit_status()
}
