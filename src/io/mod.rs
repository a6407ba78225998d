//! I/O module
//!
//! Handles command input and transcript output.
//!
//! # Components
//!
//! - `script_reader` - CSV command script reader with iterator interface
//! - `prompt` - Parsing of lines typed at the interactive prompt
//! - `transcript` - Rendering of outcomes and errors as user-facing lines

pub mod prompt;
pub mod script_reader;
pub mod transcript;

pub use prompt::{parse_prompt_line, PromptLine};
pub use script_reader::{ScriptReader, ScriptRecord};
pub use transcript::{render_error, render_outcome, render_summary, write_line};
