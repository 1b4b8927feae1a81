//! Money formatting and amount parsing shared by every screen.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use thiserror::Error;

/// Why a typed-in money amount was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is not a number: {0}")]
    NotANumber(String),
    #[error("amount is negative")]
    Negative,
}

/// Format an amount in the `$1,299.99` display style used across the app.
/// Negative amounts render as `-$20.00`.
pub fn format_money(amount: f64) -> String {
    let cents = to_cents(amount.abs());
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = cents / 100;
    let fraction = cents % 100;
    format!("{sign}${}.{fraction:02}", group_thousands(whole))
}

/// Parse a user-typed amount, tolerating a leading `$` and thousands
/// separators. Callers that model a calculator degrade failures to zero
/// with `unwrap_or(0.0)`; form guards surface the error instead.
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    if cleaned.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountError::NotANumber(cleaned.clone()))?;
    if value < 0.0 {
        return Err(AmountError::Negative);
    }
    Ok(value)
}

fn to_cents(amount: f64) -> u64 {
    let rounded = (amount * 100.0).round();
    if rounded <= 0.0 {
        0
    } else {
        // f64 keeps integers exact well past any amount the UI shows.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            rounded as u64
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
