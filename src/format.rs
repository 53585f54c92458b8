//! Presentation-layer currency formatting.
//!
//! Amounts are carried unrounded through every calculation; this module is
//! the only place two-decimal rounding happens, when a component is turned
//! into a display string (`₱1,234.56`) or parsed back from one.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// The peso sign used for display amounts.
pub const CURRENCY_SIGN: &str = "₱";

/// Formats an amount with thousands separators and exactly two decimals.
///
/// # Example
///
/// ```
/// use payroll_engine::format::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234567.891").unwrap();
/// assert_eq!(format_amount(amount), "1,234,567.89");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let unsigned = rounded.abs();

    let text = format!("{:.2}", unsigned);
    let (whole, decimal) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, decimal)
}

/// Formats an amount as a peso currency string.
///
/// Unlike the sheet this replaces, negative amounts keep their sign so a
/// formatted value always parses back to within a cent of the original.
pub fn format_currency(amount: Decimal) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", CURRENCY_SIGN, rest),
        None => format!("{}{}", CURRENCY_SIGN, formatted),
    }
}

/// Parses a currency string produced by [`format_currency`] or
/// [`format_amount`] back into a decimal.
pub fn parse_currency(text: &str) -> EngineResult<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned
        .parse::<Decimal>()
        .map_err(|_| EngineError::InvalidInput {
            field: "amount".to_string(),
            message: format!("'{}' is not a currency amount", text),
        })
}
