use std::process;

use clap::Parser;
use station_dispatch::{Cli, DispatchError};

fn main() {
    // Default to "warn" level if RUST_LOG is not set
    // Write to stderr so stdout only carries the dispatch notices
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.execute() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");

            // Print the full error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("  Caused by: {err}");
                source = err.source();
            }

            let code = e
                .downcast_ref::<DispatchError>()
                .map_or(1, DispatchError::exit_code);
            process::exit(code);
        }
    }
}
