//! Satchel - secret management with AWS SSM Parameter Store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use satchel::cli::output;
use satchel::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SATCHEL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("satchel=debug")
        } else {
            EnvFilter::new("satchel=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = execute(cli.command) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
