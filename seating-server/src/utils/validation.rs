//! Input validation helpers
//!
//! Request-level checks run in the handlers before the seating engine sees
//! the input.

use shared::error::AppError;

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a count (seats, accompanying guests) is not negative.
pub fn validate_non_negative(value: i32, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
