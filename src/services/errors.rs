use thiserror::Error;

use crate::forms::FieldErrors;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Submitted form data failed validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// Submission was dropped by the spam check.
    #[error("spam submission")]
    Spam,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
