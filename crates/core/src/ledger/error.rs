//! Ledger error types.

use orcamento_shared::{AppError, types::NumberError};
use thiserror::Error;

use crate::BudgetField;

/// Errors raised while filling in the draft item.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A numeric draft field did not parse.
    #[error("Invalid {field}: {source}")]
    InvalidNumber {
        /// Field that failed to parse.
        field: BudgetField,
        /// Parse failure.
        source: NumberError,
    },
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}
