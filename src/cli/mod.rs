// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, InputMode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs`
/// struct containing the parsed values. If parsing fails (e.g., invalid
/// arguments, an unknown account type, or the --help flag), clap will
/// automatically display an error message or help text and exit the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// Logs go to stderr so stdout carries only the transcript. Must be called
/// once, before any session is created.
///
/// # Arguments
///
/// * `default_filter` - Filter directive (e.g. `warn`, `bank_session=debug`)
///   used when `RUST_LOG` is not set. `RUST_LOG` wins when it is set.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
