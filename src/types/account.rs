//! Account-related types for the bank session
//!
//! This module defines the [`Account`] structure and the [`AccountKind`]
//! variant tag. The two variants differ only in how far a withdrawal may
//! take the balance, so they share one concrete type and a floor policy.

use crate::core::traits::AccountOperations;
use crate::types::error::BankError;
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

/// Lowest balance a current account may reach
pub const OVERDRAFT_FLOOR: Decimal = Decimal::from_parts(500, 0, 0, true, 0);

/// Account variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AccountKind {
    /// No overdraft: balance stays at or above zero
    Savings,

    /// Fixed overdraft: balance stays at or above [`OVERDRAFT_FLOOR`]
    Current,
}

impl AccountKind {
    /// Minimum balance a withdrawal may leave behind
    pub fn floor(self) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::ZERO,
            AccountKind::Current => OVERDRAFT_FLOOR,
        }
    }

    /// Whether `balance` satisfies this variant's invariant
    pub fn permits(self, balance: Decimal) -> bool {
        balance >= self.floor()
    }

    /// Rejection for a withdrawal that would cross the floor
    fn limit_error(self, balance: Decimal, requested: Decimal) -> BankError {
        match self {
            AccountKind::Savings => BankError::insufficient_funds(balance, requested),
            AccountKind::Current => BankError::overdraft_exceeded(balance, requested, self.floor()),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => write!(f, "Savings"),
            AccountKind::Current => write!(f, "Current"),
        }
    }
}

/// A single bank account
///
/// The variant is fixed at construction. The balance is private and only
/// ever moves through `apply_delta`, after the operation that
/// asked for the change has validated it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Display label, never used in any rule
    owner: String,

    kind: AccountKind,

    balance: Decimal,
}

impl Account {
    /// Create an account with an opening balance
    ///
    /// The opening balance is taken as-is, even when it lies below the
    /// variant's floor. See [`Account::is_within_floor`].
    pub fn new(owner: impl Into<String>, kind: AccountKind, balance: Decimal) -> Self {
        Account {
            owner: owner.into(),
            kind,
            balance,
        }
    }

    /// Create an account with a zero balance
    pub fn empty(owner: impl Into<String>, kind: AccountKind) -> Self {
        Self::new(owner, kind, Decimal::ZERO)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Whether the balance satisfies this account's own variant invariant
    ///
    /// Only false for an account built from a carried-over balance that was
    /// legal under a different variant.
    pub fn is_within_floor(&self) -> bool {
        self.kind.permits(self.balance)
    }

    /// A fresh account of `kind` carrying this account's owner and balance
    pub fn converted_to(&self, kind: AccountKind) -> Account {
        Account::new(self.owner.clone(), kind, self.balance)
    }

    /// The only place the balance changes
    fn apply_delta(&mut self, delta: Decimal, operation: &str) -> Result<Decimal, BankError> {
        let new_balance = self
            .balance
            .checked_add(delta)
            .ok_or_else(|| BankError::arithmetic_overflow(operation))?;

        debug!(
            kind = %self.kind,
            %delta,
            old = %self.balance,
            new = %new_balance,
            "{} applied",
            operation
        );

        self.balance = new_balance;
        Ok(new_balance)
    }
}

impl AccountOperations for Account {
    fn get_balance(&self) -> Decimal {
        self.balance
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        self.apply_delta(amount, "deposit")
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;

        if remaining < self.kind.floor() {
            return Err(self.kind.limit_error(self.balance, amount));
        }

        self.apply_delta(-amount, "withdrawal")
    }
}
