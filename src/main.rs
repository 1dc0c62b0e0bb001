//! Precheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use precheck::cli::Cli;
use precheck::requirements::{check_required_tools, write_missing_report, CheckReport};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable; the
/// default is WARN so normal runs stay silent.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("precheck=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Run the check and report any gaps on stderr.
fn run() -> precheck::Result<CheckReport> {
    let report = check_required_tools();
    if report.all_present() {
        tracing::debug!("all required commands are available");
    } else {
        let mut stderr = std::io::stderr().lock();
        write_missing_report(&mut stderr, &report.missing)?;
    }
    Ok(report)
}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    match run() {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
