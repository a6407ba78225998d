//! Front-end strategy module
//!
//! This module defines the Strategy pattern for the presentation layer that
//! drives a [`Session`]: where commands come from and how results are shown.
//! Implementations are selected at runtime.

use crate::cli::InputMode;
use crate::core::Session;
use crate::io::transcript::{render_error, render_outcome, write_line};
use crate::types::{BankError, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

pub mod interactive;
pub mod script;

pub use interactive::InteractiveStrategy;
pub use script::ScriptStrategy;

/// Presentation-layer driver for a session
///
/// This trait defines the interface for the different ways a user can talk
/// to a session. Each strategy reads commands from its own source, executes
/// them against the session, and writes one transcript line per command
/// followed by a closing summary.
pub trait SessionStrategy {
    /// Feed commands into `session`, writing the transcript to `output`
    ///
    /// Rejected commands and malformed input are written to the transcript
    /// as `Error:` lines and do not stop the run.
    ///
    /// # Arguments
    ///
    /// * `session` - The session whose active account the commands act on
    /// * `output` - Mutable reference to a writer for the transcript
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every command was read and answered (accepted or not)
    /// * `Err(String)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be opened or read
    /// - The transcript cannot be written or flushed
    fn run(&mut self, session: &mut Session, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a front-end for the requested input mode
///
/// This factory selects and instantiates the strategy implementation at
/// runtime based on the input mode chosen on the command line.
///
/// # Arguments
///
/// * `mode` - Where commands come from (Script or Interactive)
/// * `script` - Path to the command script (required for Script, ignored otherwise)
/// * `input` - Line source for Interactive mode (ignored for Script)
///
/// # Returns
///
/// A boxed trait object implementing the SessionStrategy trait
///
/// # Errors
///
/// Returns an error if script mode is requested without a script path.
pub fn create_strategy(
    mode: InputMode,
    script: Option<PathBuf>,
    input: Box<dyn BufRead>,
) -> Result<Box<dyn SessionStrategy>, String> {
    match mode {
        InputMode::Script => {
            let path = script.ok_or("script mode requires a SCRIPT path")?;
            Ok(Box::new(ScriptStrategy::new(path)))
        }
        InputMode::Interactive => Ok(Box::new(InteractiveStrategy::new(input))),
    }
}

/// Execute one parsed request and write its transcript line
///
/// # Arguments
///
/// * `session` - The session to execute the command against
/// * `request` - A parsed command, or the error produced while reading it
/// * `output` - Mutable reference to a writer for the transcript
///
/// # Returns
///
/// * `Ok(())` if the outcome or the recoverable error was written
/// * `Err(String)` for fatal input errors (returned, not written) and write failures
pub(crate) fn handle(
    session: &mut Session,
    request: Result<Command, BankError>,
    output: &mut dyn Write,
) -> Result<(), String> {
    let result = request.and_then(|command| session.execute(command));

    let line = match result {
        Ok(outcome) => render_outcome(&outcome),
        Err(error) if error.is_recoverable() => {
            warn!(%error, "command rejected");
            render_error(&error)
        }
        Err(error) => return Err(error.to_string()),
    };

    write_line(output, &line)
}
