//! # sanad-cli
//!
//! Command-line host for [`sanad_core`]: spells out invoice and voucher
//! amounts typed on the terminal.
//!
//! ## Module Organization
//! ```text
//! sanad_cli/
//! ├── lib.rs       ◄─── You are here (logging setup)
//! ├── cli.rs       ◄─── Argument parsing and output
//! ├── config.rs    ◄─── sanad.toml + SANAD_* environment
//! └── error.rs     ◄─── CliError
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr, so stdout only carries phrases)
//! 3. Load config: defaults → file → environment → flags
//! 4. Convert each amount and print it

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::{OutputFormat, SanadConfig};
pub use error::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sanad_cli=trace` - Show trace for this crate only
/// - Default: WARN, raised by each `-v`
pub fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info,sanad_cli=info",
        2 => "info,sanad_cli=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
