//! Summary error types.

use orcamento_shared::AppError;
use thiserror::Error;

use crate::BudgetField;

/// Summary computation errors.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A ledger total, or its rounded average, exceeded the decimal range.
    #[error("Total {field} is too large to average")]
    Overflow {
        /// Field whose total overflowed.
        field: BudgetField,
    },
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
