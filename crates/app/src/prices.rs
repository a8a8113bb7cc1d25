//! Prices
//!
//! Amounts are carried as integer cents throughout the domain. Decimal
//! strings only appear at the edges (admin input, seed data).

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Flat fee added to every order at checkout, in cents.
pub const SERVICE_FEE: u64 = 5_00;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("invalid price: {0:?}")]
    Malformed(String),

    #[error("price must not be negative: {0}")]
    Negative(String),
}

/// Parse a decimal price such as `"14.99"` into cents.
///
/// Fractions of a cent are rounded to the nearest cent, ties to even.
///
/// # Errors
///
/// Returns an error if the input is not a decimal number, is negative, or
/// does not fit in the cents range.
pub fn parse_price(s: &str) -> Result<u64, PriceError> {
    let trimmed = s.trim();

    let amount = trimmed
        .parse::<Decimal>()
        .map_err(|_err| PriceError::Malformed(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(trimmed.to_string()));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| PriceError::Malformed(s.to_string()))
}

/// Render cents as a decimal string with two fraction digits.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
