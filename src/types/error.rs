//! Error types for the bank session
//!
//! Every failure the session can report lives in [`BankError`].
//!
//! # Error Categories
//!
//! - **Account Errors**: invalid amount, insufficient funds, overdraft limit.
//!   These are recoverable; the balance is left exactly as it was.
//! - **Session Errors**: a variant switch refused by the switch policy.
//! - **Input Errors**: malformed command lines in a script or at the prompt.
//! - **I/O Errors**: unreadable scripts or closed output. These are fatal for
//!   the front-end that hit them.

use crate::types::account::AccountKind;
use crate::types::money::format_naira;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Amount must be greater than zero (got {}).", format_naira(*amount))]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Savings withdrawal larger than the current balance
    #[error("Insufficient funds: balance {}, requested {}.", format_naira(*balance), format_naira(*requested))]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Current-account withdrawal that would cross the overdraft floor
    #[error("Overdraft limit reached ({}): balance {}, requested {}.", format_naira(*floor), format_naira(*balance), format_naira(*requested))]
    OverdraftExceeded {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// The overdraft floor that would have been crossed
        floor: Decimal,
    },

    /// Checked arithmetic on the balance overflowed
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Variant switch refused because the carried balance breaks the target floor
    #[error("Cannot switch to {kind} account with balance {}.", format_naira(*balance))]
    SwitchRejected {
        /// Requested variant
        kind: AccountKind,
        /// Balance that would have been carried over
        balance: Decimal,
    },

    /// A command line could not be understood
    #[error("Invalid command{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidCommand {
        /// Line number in the script (if known)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// I/O error while reading commands or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return BankError::Io {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        BankError::InvalidCommand {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create an OverdraftExceeded error
    pub fn overdraft_exceeded(balance: Decimal, requested: Decimal, floor: Decimal) -> Self {
        BankError::OverdraftExceeded {
            balance,
            requested,
            floor,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a SwitchRejected error
    pub fn switch_rejected(kind: AccountKind, balance: Decimal) -> Self {
        BankError::SwitchRejected { kind, balance }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::InvalidCommand {
            line,
            message: message.into(),
        }
    }

    /// Whether the session can keep going after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BankError::Io { .. })
    }
}
