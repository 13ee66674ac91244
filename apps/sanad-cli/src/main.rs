//! # Sanad Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;
use sanad_cli::Cli;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    sanad_cli::init_tracing(cli.verbose);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Conversion failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
