//! Input validation for vault operations.
//!
//! Runs before any external call so a rejected request has no side effects.

use crate::error::{Result, ValidationError};

/// Validate and trim a secret key.
///
/// # Errors
///
/// Returns `ValidationError::EmptyKey` if the key is empty or whitespace-only.
pub fn validate_key(key: &str) -> Result<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }
    Ok(trimmed)
}

/// Validate a secret value.
///
/// Values are stored as-is, so whitespace is significant and only the
/// empty string is rejected.
///
/// # Errors
///
/// Returns `ValidationError::EmptyValue` if the value is empty.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()).into());
    }
    Ok(())
}
