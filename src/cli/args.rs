use crate::core::{SessionConfig, SwitchPolicy};
use crate::types::{parse_amount, AccountKind};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Run a single-account bank session from a command script or an interactive prompt
#[derive(Parser, Debug)]
#[command(name = "bank-session")]
#[command(about = "Run a savings/current bank account session", long_about = None)]
pub struct CliArgs {
    /// CSV command script (columns: action,value)
    #[arg(value_name = "SCRIPT", help = "Path to a CSV command script")]
    pub script: Option<PathBuf>,

    /// Where commands come from
    #[arg(
        long = "mode",
        value_name = "MODE",
        help = "Input mode: 'script' replays SCRIPT, 'interactive' reads stdin (default: script if SCRIPT is given)"
    )]
    pub mode: Option<InputMode>,

    /// Account holder shown in the summary
    #[arg(long = "owner", value_name = "NAME", default_value = "User")]
    pub owner: String,

    /// Variant of the initial account
    #[arg(long = "account", value_name = "KIND", default_value = "savings")]
    pub account: AccountKind,

    /// Balance of the initial account
    #[arg(
        long = "opening-balance",
        value_name = "AMOUNT",
        default_value = "0",
        value_parser = parse_amount,
        allow_hyphen_values = true
    )]
    pub opening_balance: Decimal,

    /// Behaviour when switching would carry a balance below the new account's floor
    #[arg(long = "switch-policy", value_name = "POLICY", default_value = "carry")]
    pub switch_policy: SwitchPolicy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

/// Available input modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    Script,
    Interactive,
}

impl CliArgs {
    /// Resolve the input mode
    ///
    /// An explicit `--mode` always wins. Otherwise the mode is Script when a
    /// SCRIPT path was given and Interactive when it was not.
    ///
    /// # Returns
    ///
    /// The `InputMode` the front-end should be created for.
    pub fn input_mode(&self) -> InputMode {
        self.mode.unwrap_or(if self.script.is_some() {
            InputMode::Script
        } else {
            InputMode::Interactive
        })
    }

    /// Build the starting session parameters from CLI arguments
    ///
    /// Options that were not given fall back to their clap defaults, which
    /// match `SessionConfig::default()`.
    ///
    /// # Returns
    ///
    /// A `SessionConfig` with owner, account kind, opening balance and switch policy.
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            owner: self.owner.clone(),
            kind: self.account,
            opening_balance: self.opening_balance,
            switch_policy: self.switch_policy,
        }
    }
}
