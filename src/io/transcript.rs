//! Transcript rendering
//!
//! Turns session outcomes and errors into the user-facing lines a front-end
//! prints. All functions are pure (no I/O) apart from [`write_line`].

use crate::core::{Outcome, Session};
use crate::types::{format_naira, BankError};
use std::io::Write;

/// Message shown after a successful command
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Deposited { amount, balance } => format!(
            "{} deposited successfully! Balance: {}",
            format_naira(*amount),
            format_naira(*balance)
        ),
        Outcome::Withdrawn { amount, balance } => format!(
            "{} withdrawn successfully! Balance: {}",
            format_naira(*amount),
            format_naira(*balance)
        ),
        Outcome::Switched { kind, balance } => format!(
            "Switched to {} account. Balance: {}",
            kind,
            format_naira(*balance)
        ),
        Outcome::Balance { balance } => format!("Balance: {}", format_naira(*balance)),
    }
}

/// Message shown for a rejected command
pub fn render_error(error: &BankError) -> String {
    format!("Error: {}", error)
}

/// Closing line summarising the active account
pub fn render_summary(session: &Session) -> String {
    format!(
        "Final balance ({}, {}): {}",
        session.kind(),
        session.owner(),
        format_naira(session.current_balance())
    )
}

/// Write one transcript line
///
/// # Arguments
///
/// * `output` - Mutable reference to a writer for the transcript
/// * `line` - The line to write, without trailing newline
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_line(output: &mut dyn Write, line: &str) -> Result<(), String> {
    writeln!(output, "{}", line).map_err(|e| format!("Failed to write output: {}", e))
}
