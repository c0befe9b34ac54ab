//! Session error types.

use orcamento_shared::{AppError, types::SessionId};
use thiserror::Error;

use crate::summary::SummaryError;

/// Session-related errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session not found or expired.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// The action needs a computed summary.
    #[error("No budget summary has been computed yet")]
    NoSummary,

    /// Overrides are only accepted in edit mode.
    #[error("Summary is not in edit mode")]
    NotEditing,

    /// A previous holder of the session lock panicked.
    #[error("Session {0} is unavailable")]
    Poisoned(SessionId),

    /// Summary computation failed.
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => Self::NotFound(err.to_string()),
            SessionError::NoSummary | SessionError::NotEditing => {
                Self::BusinessRule(err.to_string())
            }
            SessionError::Poisoned(_) => Self::Internal(err.to_string()),
            SessionError::Summary(inner) => inner.into(),
        }
    }
}
