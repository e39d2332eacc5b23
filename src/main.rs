use std::{env, io, process};

use mbta::cli::commands::dispatch;
use mbta::cli::output;
use mbta::config::Settings;
use mbta::exitcode;
use mbta::infrastructure::di::ServiceContainer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    setup_logging();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&mut io::stderr(), &e);
            process::exit(exitcode::CONFIG);
        }
    };

    let container = match ServiceContainer::new(settings) {
        Ok(container) => container,
        Err(e) => {
            output::error(&mut io::stderr(), &e);
            process::exit(exitcode::SOFTWARE);
        }
    };

    let status = dispatch(env::args_os(), &container, &mut io::stdout().lock());
    tracing::debug!("exit status: {:?}", status);
    process::exit(status.code());
}

fn setup_logging() {
    // MBTA_LOG uses EnvFilter syntax, e.g. MBTA_LOG=debug or MBTA_LOG=mbta=trace
    let filter = EnvFilter::try_from_env("MBTA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout carries only command output
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
