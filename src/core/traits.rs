//! Core traits for balance-holding types
//!
//! This module defines the contract shared by a single [`Account`] and the
//! [`Session`] that brokers one, so front-ends can drive either.
//!
//! [`Account`]: crate::types::Account
//! [`Session`]: crate::core::Session

use crate::types::BankError;
use rust_decimal::Decimal;

/// Deposit, withdraw and balance query
///
/// Every implementation must be all-or-nothing: a failed operation leaves the
/// balance exactly as it was.
pub trait AccountOperations {
    /// Current balance, no side effects
    fn get_balance(&self) -> Decimal;

    /// Credit `amount`, returning the new balance
    ///
    /// Fails with [`BankError::InvalidAmount`] if `amount <= 0`.
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError>;

    /// Debit `amount` under the implementor's limit policy, returning the new balance
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError>;
}
