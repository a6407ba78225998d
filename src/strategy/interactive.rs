//! Interactive prompt strategy
//!
//! Reads one command per line until end of input or `exit`, answering each
//! line immediately. This is the terminal counterpart of the bank window:
//! the success and error lines replace its message dialogs.

use crate::core::Session;
use crate::io::prompt::{parse_prompt_line, PromptLine};
use crate::io::transcript::{render_summary, write_line};
use crate::strategy::{handle, SessionStrategy};
use crate::types::{format_naira, BankError};
use std::io::{BufRead, Write};

const HELP: &str =
    "Commands: deposit <amount>, withdraw <amount>, select <savings|current>, balance, exit";

/// Line-oriented prompt over any buffered reader
pub struct InteractiveStrategy {
    input: Box<dyn BufRead>,
}

impl InteractiveStrategy {
    pub fn new(input: Box<dyn BufRead>) -> Self {
        InteractiveStrategy { input }
    }
}

impl SessionStrategy for InteractiveStrategy {
    fn run(&mut self, session: &mut Session, output: &mut dyn Write) -> Result<(), String> {
        write_line(
            output,
            &format!(
                "{} account for {}. Balance: {}",
                session.kind(),
                session.owner(),
                format_naira(session.current_balance())
            ),
        )?;
        write_line(output, HELP)?;

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buffer)
                .map_err(|e| format!("Failed to read input: {}", e))?;
            if read == 0 {
                break;
            }

            let request = match std::str::from_utf8(&buffer) {
                Ok(line) => parse_prompt_line(line),
                Err(_) => Err("line is not valid UTF-8".to_string()),
            };

            match request {
                Ok(PromptLine::Empty) => continue,
                Ok(PromptLine::Exit) => break,
                Ok(PromptLine::Command(command)) => handle(session, Ok(command), output)?,
                Err(message) => {
                    let error = BankError::invalid_command(None, message);
                    handle(session, Err(error), output)?
                }
            }
            output
                .flush()
                .map_err(|e| format!("Failed to flush output: {}", e))?;
        }

        write_line(output, &render_summary(session))
    }
}
