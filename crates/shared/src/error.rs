//! Application-wide error types.
//!
//! Each variant classifies a failure for the HTTP layer. The message is the
//! module error's own text; the category travels separately as
//! [`AppError::error_code`].

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Classified budgeting errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown or expired session.
    #[error("{0}")]
    NotFound(String),

    /// Form input that cannot be used (bad number, unknown field, bad body).
    #[error("{0}")]
    Validation(String),

    /// Action not allowed in the session's current state.
    #[error("{0}")]
    BusinessRule(String),

    /// Failure on our side; details are logged.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("Session not found: 42".into()), 404, "NOT_FOUND")]
    #[case(AppError::Validation("Invalid cost: 'x' is not a number".into()), 400, "VALIDATION_ERROR")]
    #[case(AppError::BusinessRule("Summary is not in edit mode".into()), 422, "BUSINESS_RULE_VIOLATION")]
    #[case(AppError::Internal("session lock poisoned".into()), 500, "INTERNAL_ERROR")]
    fn test_error_classification(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_client_errors_show_message_as_is() {
        assert_eq!(
            AppError::BusinessRule("No budget summary has been computed yet".into()).to_string(),
            "No budget summary has been computed yet"
        );
        assert_eq!(
            AppError::Internal("session lock poisoned".into()).to_string(),
            "Internal error: session lock poisoned"
        );
    }
}
