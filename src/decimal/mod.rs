//! Exact decimal helpers used for every monetary value in a report.
//!
//! Collaborators hand amounts over as decimal strings. They are parsed into
//! [`Decimal`] without going through floating point, and all arithmetic is
//! checked so overflow surfaces as an error instead of a panic.

use rust_decimal::Decimal;

use crate::errors::{ReportError, Result};

/// Parses a decimal string exactly. Surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ReportError::InvalidAmount("empty amount".into()));
    }
    Decimal::from_str_exact(trimmed)
        .map_err(|err| ReportError::InvalidAmount(format!("`{raw}`: {err}")))
}

/// Adds two decimal strings.
pub fn add(a: &str, b: &str) -> Result<Decimal> {
    checked_add(parse_amount(a)?, parse_amount(b)?)
}

/// Multiplies two decimal strings.
pub fn multiply(a: &str, b: &str) -> Result<Decimal> {
    let (a, b) = (parse_amount(a)?, parse_amount(b)?);
    a.checked_mul(b)
        .ok_or_else(|| ReportError::Overflow(format!("{a} * {b}")))
}

/// Adds two parsed amounts, reporting overflow as an error.
pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| ReportError::Overflow(format!("{a} + {b}")))
}

/// Sums already-parsed amounts, starting from zero.
pub fn sum<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}

/// Parses and sums decimal strings, starting from zero.
pub fn sum_strings<'a, I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = &'a str>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, raw| checked_add(acc, parse_amount(raw)?))
}

/// Forces an amount to be non-positive, whatever sign it arrived with.
///
/// Zero stays a plain zero so it never renders as `-0`.
pub fn negative(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        Decimal::ZERO
    } else {
        -amount.abs()
    }
}
