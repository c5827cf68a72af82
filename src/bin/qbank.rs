//! Qbank CLI binary.

use std::process;

use clap::Parser;
use qbank::cli::{args::*, commands::*};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Parse command line arguments using clap
    let args = QbankArgs::parse();

    // Map verbosity to a default tracing filter; RUST_LOG still wins.
    let filter = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
