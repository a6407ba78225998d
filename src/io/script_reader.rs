//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over commands from a CSV script with the
//! columns `action,value`:
//!
//! ```text
//! action,value
//! deposit,1000
//! withdraw,1500
//! select,current
//! balance,
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the script is reported from [`ScriptReader::open`]
//! - Malformed rows are yielded as `Err(BankError::InvalidCommand)` carrying
//!   the script line number; iteration continues with the next row
//! - I/O failures mid-read are yielded as `Err(BankError::Io)`; callers
//!   should stop iterating

use crate::types::{BankError, Command};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of a command script
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScriptRecord {
    pub action: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Streaming reader over a command script
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns a message if the file cannot be opened or its header row
    /// cannot be read.
    pub fn open(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        Self::from_reader(file)
            .map_err(|e| format!("Failed to read header of '{}': {}", path.display(), e))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any reader producing CSV text
    ///
    /// Fields are trimmed and rows may omit the value column.
    pub fn from_reader(source: R) -> Result<Self, BankError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Command, BankError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let line = record.position().map(|pos| pos.line());
                let parsed = record
                    .deserialize::<ScriptRecord>(Some(&self.headers))
                    .map_err(|e| BankError::invalid_command(line, e.to_string()))
                    .and_then(|row| {
                        Command::parse(&row.action, row.value.as_deref())
                            .map_err(|message| BankError::invalid_command(line, message))
                    });
                Some(parsed)
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
