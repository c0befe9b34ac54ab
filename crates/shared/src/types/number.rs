//! Explicit parsing of numeric form input.
//!
//! Form fields arrive as text. A blank field means zero, anything else must
//! parse as a decimal number (plain or scientific notation). Unparseable text
//! is reported instead of silently becoming `NaN`.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::AppError;

/// Numeric input that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a number")]
pub struct NumberError {
    /// The rejected input, trimmed.
    pub input: String,
}

/// Parses a form field into a decimal.
///
/// Leading and trailing whitespace is ignored. An empty field is zero.
///
/// # Errors
///
/// Returns `NumberError` when the text is not a finite decimal number.
pub fn parse_number(input: &str) -> Result<Decimal, NumberError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(digits)
        .or_else(|_| Decimal::from_scientific(digits))
        .map_err(|_| NumberError {
            input: trimmed.to_string(),
        })
}

impl From<NumberError> for AppError {
    fn from(err: NumberError) -> Self {
        Self::Validation(err.to_string())
    }
}
