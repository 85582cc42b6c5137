//! Validation Utilities

use validator::{Validate, ValidationError, ValidationErrors};

use super::error::FieldError;

/// Validate a request, returning every failing field as a single message.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), String> {
    request.validate().map_err(|e| validation_message(&e))
}

/// Reject text that is empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Flatten validation errors into one `"field: message; field: message"` string.
///
/// Fields are sorted by name so the message is stable across runs.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    if field_errors.is_empty() {
        return "Validation failed".into();
    }

    field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
