//! Money parsing and display
//!
//! Balances are `Decimal` values with minor-unit (kobo) precision. Amounts
//! are shown the way the bank's own screens show them: naira sign, thousands
//! separators, two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits a monetary amount may carry
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Currency symbol used in every rendered amount
pub const CURRENCY_SYMBOL: &str = "₦";

/// Parse a user-entered amount
///
/// Surrounding whitespace is ignored. The value may be negative or zero;
/// rejecting those is the account's job, not the parser's.
///
/// # Errors
///
/// Returns a message if the text is not a number or carries more than
/// [`MINOR_UNIT_SCALE`] fractional digits.
pub fn parse_amount(text: &str) -> Result<Decimal, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("amount is required".to_string());
    }

    let amount =
        Decimal::from_str(trimmed).map_err(|_| format!("'{}' is not a valid amount", trimmed))?;

    // Decimal rounds past 28 fractional digits, so count them in the text
    if fractional_digits(trimmed) > MINOR_UNIT_SCALE as usize {
        return Err(format!(
            "'{}' has more than {} decimal places",
            trimmed, MINOR_UNIT_SCALE
        ));
    }

    Ok(amount)
}

/// Significant fractional digits written in `number` (trailing zeros ignored)
fn fractional_digits(number: &str) -> usize {
    number
        .split_once('.')
        .map(|(_, fraction)| {
            fraction
                .trim_end_matches(|c: char| c == '0' || c == '_')
                .chars()
                .filter(char::is_ascii_digit)
                .count()
        })
        .unwrap_or(0)
}

/// Render an amount as `₦1,234.56`
///
/// Negative amounts keep the sign after the currency symbol (`₦-300.00`).
pub fn format_naira(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointNearestEven);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}{}.{}",
        CURRENCY_SYMBOL,
        sign,
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
