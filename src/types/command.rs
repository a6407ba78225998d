//! Commands the presentation layer can send to a session

use crate::types::account::AccountKind;
use crate::types::money::parse_amount;
use rust_decimal::Decimal;

/// A single user request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Credit the active account
    Deposit(Decimal),

    /// Debit the active account, subject to the variant's floor
    Withdraw(Decimal),

    /// Replace the active account with one of another variant
    Select(AccountKind),

    /// Report the current balance
    Balance,
}

impl Command {
    /// Build a command from an action word and its (optional) argument
    ///
    /// Actions are case-insensitive. `deposit` and `withdraw` require an
    /// amount, `select` requires `savings` or `current`, `balance` ignores
    /// whatever follows it.
    ///
    /// # Errors
    ///
    /// Returns a message describing why the input could not be understood.
    pub fn parse(action: &str, value: Option<&str>) -> Result<Command, String> {
        let value = value.map(str::trim).filter(|v| !v.is_empty());

        match action.trim().to_lowercase().as_str() {
            "deposit" => {
                let text = value.ok_or("deposit requires an amount")?;
                Ok(Command::Deposit(parse_amount(text)?))
            }
            "withdraw" => {
                let text = value.ok_or("withdraw requires an amount")?;
                Ok(Command::Withdraw(parse_amount(text)?))
            }
            "select" => {
                let text = value.ok_or("select requires an account type (savings or current)")?;
                let kind = match text.to_lowercase().as_str() {
                    "savings" => AccountKind::Savings,
                    "current" => AccountKind::Current,
                    other => return Err(format!("unknown account type '{}'", other)),
                };
                Ok(Command::Select(kind))
            }
            "balance" => Ok(Command::Balance),
            "" => Err("missing action".to_string()),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}
