//! Error conversion glue between the form, domain and service layers.
//!
//! Forms and domain types only depend on the `data` feature and must not know
//! about service errors, so the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        log::error!("Value rejected after validation: {val}");
        ServiceError::Internal
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::Spam => ServiceError::Spam,
            FormError::Invalid(errors) => ServiceError::Validation(errors),
            FormError::TypeConstraint(message) => {
                log::error!("Form value rejected after validation: {message}");
                ServiceError::Internal
            }
        }
    }
}
