//! Validation utilities.

use crate::EcoleError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `EcoleError` on failure.
    fn validate_request(&self) -> Result<(), EcoleError> {
        self.validate().map_err(validation_errors_to_ecole_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `EcoleError::Validation`.
///
/// The message lists every failing field as `field: message`, joined by `; `.
#[must_use]
pub fn validation_errors_to_ecole_error(errors: ValidationErrors) -> EcoleError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();

    EcoleError::Validation(messages.join("; "))
}
