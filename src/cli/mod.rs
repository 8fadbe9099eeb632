//! Command-line interface: argument parsing, file discovery, reporting.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod discover;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;
pub use run::{FileReport, Outcome, RunResult};

/// Install the stderr log subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("default_methods=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "default_methods=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::print(&result, args.format)?;

    Ok(ExitStatus::from_result(&result))
}
