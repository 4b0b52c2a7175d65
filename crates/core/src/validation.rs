//! Bridges `validator` derive output into [`CoreError::Validation`].
//!
//! DTOs declare their field constraints with `#[derive(Validate)]`; callers
//! run [`validate_input`] and get a single error whose message lists every
//! failing field as `field: message`, sorted by field name.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Flatten field-level validation errors into `field: message; ...`.
///
/// Falls back to the rule code (`length`, `range`, ...) when a rule has no
/// custom message.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
