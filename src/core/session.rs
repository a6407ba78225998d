//! Session controller
//!
//! This module provides the `Session` struct which owns the single active
//! account and brokers every request coming from the presentation layer.
//!
//! The Session is responsible for:
//! - Delegating deposits, withdrawals and balance queries
//! - Switching account variant by rebuilding the account around its balance
//! - Applying the configured [`SwitchPolicy`] when the carried balance does
//!   not fit the destination variant

use crate::core::traits::AccountOperations;
use crate::types::{Account, AccountKind, BankError, Command};
use clap::ValueEnum;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// What to do when a variant switch carries a balance below the new floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SwitchPolicy {
    /// Carry the balance unchanged and log a warning
    #[default]
    Carry,

    /// Refuse the switch and keep the current account
    Reject,
}

/// Starting parameters for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub owner: String,
    pub kind: AccountKind,
    pub opening_balance: Decimal,
    pub switch_policy: SwitchPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            owner: "User".to_string(),
            kind: AccountKind::Savings,
            opening_balance: Decimal::ZERO,
            switch_policy: SwitchPolicy::Carry,
        }
    }
}

/// Result of a successfully executed [`Command`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Deposited { amount: Decimal, balance: Decimal },
    Withdrawn { amount: Decimal, balance: Decimal },
    Switched { kind: AccountKind, balance: Decimal },
    Balance { balance: Decimal },
}

/// Owns the single active account
#[derive(Debug, Clone)]
pub struct Session {
    account: Account,
    switch_policy: SwitchPolicy,
}

impl Session {
    /// Create a session with the default configuration (empty Savings account)
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session from explicit starting parameters
    ///
    /// An opening balance below the floor of the chosen variant is accepted
    /// and logged as a warning.
    ///
    /// # Arguments
    ///
    /// * `config` - Owner, account kind, opening balance and switch policy
    ///
    /// # Returns
    ///
    /// A new Session whose active account is built from `config`
    pub fn with_config(config: SessionConfig) -> Self {
        let account = Account::new(config.owner, config.kind, config.opening_balance);
        if !account.is_within_floor() {
            warn!(
                kind = %account.kind(),
                balance = %account.get_balance(),
                "opening balance is below the account floor"
            );
        }

        Session {
            account,
            switch_policy: config.switch_policy,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn kind(&self) -> AccountKind {
        self.account.kind()
    }

    pub fn owner(&self) -> &str {
        self.account.owner()
    }

    pub fn switch_policy(&self) -> SwitchPolicy {
        self.switch_policy
    }

    pub fn current_balance(&self) -> Decimal {
        self.account.get_balance()
    }

    /// Make `kind` the active variant, carrying the balance over
    ///
    /// Always builds a new account, even when `kind` is already active.
    /// Reselecting the active variant never fails, whatever the policy.
    ///
    /// # Arguments
    ///
    /// * `kind` - The variant to make active
    ///
    /// # Returns
    ///
    /// The balance of the new active account (always equal to the old one)
    ///
    /// # Errors
    ///
    /// Under [`SwitchPolicy::Reject`], returns [`BankError::SwitchRejected`]
    /// if the balance is below the floor of a different `kind`. The active
    /// account is untouched in that case.
    pub fn select_variant(&mut self, kind: AccountKind) -> Result<Decimal, BankError> {
        let replacement = self.account.converted_to(kind);

        let same_variant = kind == self.account.kind();

        if !same_variant && !replacement.is_within_floor() {
            match self.switch_policy {
                SwitchPolicy::Reject => {
                    return Err(BankError::switch_rejected(kind, replacement.get_balance()));
                }
                SwitchPolicy::Carry => warn!(
                    from = %self.account.kind(),
                    to = %kind,
                    balance = %replacement.get_balance(),
                    floor = %kind.floor(),
                    "carrying a balance below the floor of the new account"
                ),
            }
        }

        debug!(from = %self.account.kind(), to = %kind, "account variant switched");
        self.account = replacement;

        Ok(self.account.get_balance())
    }

    /// Run one command against the active account
    ///
    /// # Arguments
    ///
    /// * `command` - The parsed user request
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` describing the accepted command and the resulting balance
    /// * `Err(BankError)` if the command was rejected; the balance is unchanged
    pub fn execute(&mut self, command: Command) -> Result<Outcome, BankError> {
        match command {
            Command::Deposit(amount) => self.deposit(amount).map(|balance| Outcome::Deposited {
                amount,
                balance,
            }),
            Command::Withdraw(amount) => self.withdraw(amount).map(|balance| Outcome::Withdrawn {
                amount,
                balance,
            }),
            Command::Select(kind) => self
                .select_variant(kind)
                .map(|balance| Outcome::Switched { kind, balance }),
            Command::Balance => Ok(Outcome::Balance {
                balance: self.current_balance(),
            }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountOperations for Session {
    fn get_balance(&self) -> Decimal {
        self.current_balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        self.account.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        self.account.withdraw(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OVERDRAFT_FLOOR;
    use rstest::rstest;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn session_with(kind: AccountKind, balance: Decimal, switch_policy: SwitchPolicy) -> Session {
        Session::with_config(SessionConfig {
            kind,
            opening_balance: balance,
            switch_policy,
            ..SessionConfig::default()
        })
    }

    #[test]
    fn test_new_session_is_empty_savings() {
        let session = Session::new();

        assert_eq!(session.kind(), AccountKind::Savings);
        assert_eq!(session.owner(), "User");
        assert_eq!(session.current_balance(), Decimal::ZERO);
        assert_eq!(session.switch_policy(), SwitchPolicy::Carry);
    }

    #[test]
    fn test_savings_scenario() {
        let mut session = Session::new();

        assert_eq!(session.deposit(dec(1000)), Ok(dec(1000)));
        assert_eq!(
            session.withdraw(dec(1500)),
            Err(BankError::insufficient_funds(dec(1000), dec(1500)))
        );
        assert_eq!(session.current_balance(), dec(1000));
        assert_eq!(session.withdraw(dec(1000)), Ok(dec(0)));
        assert_eq!(session.current_balance(), dec(0));
    }

    #[test]
    fn test_current_scenario() {
        let mut session = Session::new();
        session.select_variant(AccountKind::Current).unwrap();

        assert_eq!(session.withdraw(dec(300)), Ok(dec(-300)));
        assert_eq!(
            session.withdraw(dec(300)),
            Err(BankError::overdraft_exceeded(dec(-300), dec(300), OVERDRAFT_FLOOR))
        );
        assert_eq!(session.current_balance(), dec(-300));
        assert_eq!(session.deposit(dec(300)), Ok(dec(0)));
    }

    #[rstest]
    fn test_negative_deposit_rejected_on_either_variant(
        #[values(AccountKind::Savings, AccountKind::Current)] kind: AccountKind,
    ) {
        let mut session = session_with(kind, dec(75), SwitchPolicy::Carry);

        assert_eq!(
            session.deposit(dec(-50)),
            Err(BankError::invalid_amount(dec(-50)))
        );
        assert_eq!(session.current_balance(), dec(75));
    }

    #[rstest]
    #[case::savings_to_current(AccountKind::Savings, AccountKind::Current, dec(1000))]
    #[case::current_to_savings(AccountKind::Current, AccountKind::Savings, dec(250))]
    #[case::same_variant(AccountKind::Current, AccountKind::Current, dec(-120))]
    #[case::fractional(AccountKind::Savings, AccountKind::Current, Decimal::new(1234, 2))]
    fn test_switch_preserves_balance(
        #[case] from: AccountKind,
        #[case] to: AccountKind,
        #[case] balance: Decimal,
    ) {
        let mut session = session_with(from, balance, SwitchPolicy::Carry);

        assert_eq!(session.select_variant(to), Ok(balance));
        assert_eq!(session.kind(), to);
        assert_eq!(session.current_balance(), balance);
        assert_eq!(session.owner(), "User");
    }

    #[test]
    fn test_carry_policy_keeps_overdrawn_balance_in_savings() {
        let mut session = session_with(AccountKind::Current, dec(-300), SwitchPolicy::Carry);

        assert_eq!(session.select_variant(AccountKind::Savings), Ok(dec(-300)));
        assert_eq!(session.kind(), AccountKind::Savings);
        assert!(!session.account().is_within_floor());

        // Withdrawals stay blocked until deposits restore the floor
        assert!(matches!(
            session.withdraw(dec(1)),
            Err(BankError::InsufficientFunds { .. })
        ));
        assert_eq!(session.deposit(dec(400)), Ok(dec(100)));
        assert_eq!(session.withdraw(dec(100)), Ok(dec(0)));
    }

    #[test]
    fn test_reject_policy_refuses_overdrawn_switch() {
        let mut session = session_with(AccountKind::Current, dec(-300), SwitchPolicy::Reject);

        assert_eq!(
            session.select_variant(AccountKind::Savings),
            Err(BankError::switch_rejected(AccountKind::Savings, dec(-300)))
        );
        assert_eq!(session.kind(), AccountKind::Current);
        assert_eq!(session.current_balance(), dec(-300));
    }

    #[rstest]
    fn test_reselecting_active_variant_never_rejected(
        #[values(SwitchPolicy::Carry, SwitchPolicy::Reject)] policy: SwitchPolicy,
    ) {
        let mut session = session_with(AccountKind::Current, dec(-600), policy);

        assert_eq!(session.select_variant(AccountKind::Current), Ok(dec(-600)));
        assert_eq!(session.kind(), AccountKind::Current);
        assert_eq!(session.current_balance(), dec(-600));
    }

    #[test]
    fn test_reject_policy_allows_switch_within_floor() {
        let mut session = session_with(AccountKind::Current, dec(20), SwitchPolicy::Reject);

        assert_eq!(session.select_variant(AccountKind::Savings), Ok(dec(20)));
        assert_eq!(session.kind(), AccountKind::Savings);
    }

    #[test]
    fn test_execute_maps_commands_to_outcomes() {
        let mut session = Session::new();

        assert_eq!(
            session.execute(Command::Deposit(dec(500))),
            Ok(Outcome::Deposited {
                amount: dec(500),
                balance: dec(500)
            })
        );
        assert_eq!(
            session.execute(Command::Select(AccountKind::Current)),
            Ok(Outcome::Switched {
                kind: AccountKind::Current,
                balance: dec(500)
            })
        );
        assert_eq!(
            session.execute(Command::Withdraw(dec(900))),
            Ok(Outcome::Withdrawn {
                amount: dec(900),
                balance: dec(-400)
            })
        );
        assert_eq!(
            session.execute(Command::Balance),
            Ok(Outcome::Balance { balance: dec(-400) })
        );
        assert_eq!(
            session.execute(Command::Withdraw(dec(0))),
            Err(BankError::invalid_amount(dec(0)))
        );
    }
}
