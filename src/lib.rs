//! Bank Session Library
//! # Overview
//!
//! This library models a single bank account session: one active account,
//! deposits and withdrawals against it, and switching between account
//! variants while keeping the balance.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, AccountKind, Command, BankError, money helpers)
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The deposit/withdraw/balance contract
//!   - [`core::session`] - The session controller owning the active account
//! - [`io`] - Command script reading, prompt parsing and transcript rendering
//! - [`strategy`] - Pluggable front-ends (script replay, interactive prompt)
//! - [`cli`] - CLI arguments parsing and logging setup
//!
//! # Account Variants
//!
//! - **Savings**: the balance never drops below zero
//! - **Current**: the balance may be overdrawn down to -500
//!
//! Deposits and withdrawals must be strictly positive. A rejected operation
//! leaves the balance untouched.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{AccountOperations, Outcome, Session, SessionConfig, SwitchPolicy};
pub use types::{Account, AccountKind, BankError, Command, OVERDRAFT_FLOOR};
