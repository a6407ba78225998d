//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the account and its variant tag
//! - `command`: user requests understood by a session
//! - `error`: error types for the bank session
//! - `money`: amount parsing and display

pub mod account;
pub mod command;
pub mod error;
pub mod money;

pub use account::{Account, AccountKind, OVERDRAFT_FLOOR};
pub use command::Command;
pub use error::BankError;
pub use money::{format_naira, parse_amount};
