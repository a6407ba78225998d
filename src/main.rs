//! Bank session CLI
//!
//! Command-line front-end for a single savings/current bank account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > transcript.txt
//! cargo run -- --account current --opening-balance 250 commands.csv
//! cargo run -- --switch-policy reject commands.csv
//! cargo run -- --mode interactive --owner Ada
//! ```
//!
//! In script mode the CSV commands are replayed and the transcript goes to
//! stdout. In interactive mode one command is read per line from stdin.
//! Logs go to stderr (`RUST_LOG` or `--log-level`).
//!
//! # Exit Codes
//!
//! - 0: Success (rejected commands do not count as failures)
//! - 1: Error (script not found, unreadable input, output closed, etc.)

use bank_session::cli;
use bank_session::core::Session;
use bank_session::strategy::{self, SessionStrategy};
use std::io::BufReader;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let mut session = Session::with_config(args.to_session_config());

    let stdin = Box::new(BufReader::new(std::io::stdin()));
    let mut frontend = match strategy::create_strategy(args.input_mode(), args.script.clone(), stdin)
    {
        Ok(frontend) => frontend,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout();
    if let Err(e) = frontend.run(&mut session, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
