//! Field checks shared by the entity modules.

use crate::errors::ModelError;

/// Non-blank and at most `max` characters.
pub fn required(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    max_len(field, value, max)
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn optional(field: &str, value: Option<&str>, max: usize) -> Result<(), ModelError> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

pub fn non_negative(field: &str, value: Option<i32>) -> Result<(), ModelError> {
    match value {
        Some(v) if v < 0 => Err(ModelError::Validation(format!("{field} must be >= 0"))),
        _ => Ok(()),
    }
}
