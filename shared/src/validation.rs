//! Input validation for bill and transaction fields
//!
//! Each helper checks exactly one field and reports the field name with the
//! failure, so callers can stop at the first bad value.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// Text Fields
// ============================================================================

/// Require a non-blank value, returning it trimmed
pub fn require_text(field: &'static str, raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Parse a yes/no answer. `Y` (any case) means yes, any other non-blank answer means no.
pub fn parse_yes_no(field: &'static str, raw: &str) -> CoreResult<bool> {
    let answer = require_text(field, raw)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

// ============================================================================
// Numeric Fields
// ============================================================================

/// Parse an amount as typed at the desk: `,` group separators are allowed,
/// `_` digit separators are not.
fn parse_decimal(field: &'static str, raw: &str) -> CoreResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    let invalid = || CoreError::validation(field, format!("'{}' is not a valid amount", trimmed));
    if trimmed.contains('_') {
        return Err(invalid());
    }
    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&digits).map_err(|_| invalid())
}

/// Check an amount is zero or more
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> CoreResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(CoreError::validation(field, "cannot be negative"));
    }
    Ok(value)
}

/// Check an amount is strictly greater than zero
pub fn ensure_positive(field: &'static str, value: Decimal) -> CoreResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(CoreError::validation(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Parse a decimal amount that must be zero or more
pub fn parse_non_negative_amount(field: &'static str, raw: &str) -> CoreResult<Decimal> {
    ensure_non_negative(field, parse_decimal(field, raw)?)
}

/// Parse a decimal amount that must be strictly positive
pub fn parse_positive_amount(field: &'static str, raw: &str) -> CoreResult<Decimal> {
    ensure_positive(field, parse_decimal(field, raw)?)
}

/// Parse a whole-number quantity greater than zero
pub fn parse_quantity(field: &'static str, raw: &str) -> CoreResult<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CoreError::validation(field, format!("'{}' is not a whole number", trimmed)))?;
    if value <= 0 {
        return Err(CoreError::validation(field, "must be greater than zero"));
    }
    u32::try_from(value).map_err(|_| CoreError::validation(field, "is too large"))
}
