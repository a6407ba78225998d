//! Script replay strategy
//!
//! Replays a CSV command script against a session and writes one transcript
//! line per row, followed by a summary of the active account.
//!
//! The script is streamed row by row through [`ScriptReader`]; malformed rows
//! become `Error:` lines and replay continues with the next row.

use crate::core::Session;
use crate::io::script_reader::ScriptReader;
use crate::io::transcript::{render_summary, write_line};
use crate::strategy::{handle, SessionStrategy};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Replays a command script file
///
/// # Examples
///
/// ```no_run
/// use bank_session::core::Session;
/// use bank_session::strategy::{ScriptStrategy, SessionStrategy};
///
/// let mut strategy = ScriptStrategy::new("commands.csv".into());
/// let mut session = Session::new();
/// strategy
///     .run(&mut session, &mut std::io::stdout())
///     .expect("Replay failed");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptStrategy {
    path: PathBuf,
}

impl ScriptStrategy {
    pub fn new(path: PathBuf) -> Self {
        ScriptStrategy { path }
    }
}

impl SessionStrategy for ScriptStrategy {
    fn run(&mut self, session: &mut Session, output: &mut dyn Write) -> Result<(), String> {
        let reader = ScriptReader::open(&self.path)?;
        info!(script = %self.path.display(), "replaying command script");

        for request in reader {
            handle(session, request, output)?;
        }

        write_line(output, &render_summary(session))
    }
}
