//! Input validation for tfsecrets operations.
//!
//! Validates field keys and memo suffixes supplied by users.

use crate::error::{Result, ValidationError};

/// Validate a secret field key.
///
/// Field keys must be usable as flat attribute names:
/// - Only ASCII letters, digits, underscore, hyphen and dot
/// - Cannot start with a dot
/// - Cannot be empty
///
/// # Arguments
///
/// * `key` - The field key to validate
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_field_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if key.starts_with('.') {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "cannot start with a dot".to_string(),
        }
        .into());
    }

    check_chars(key)
}

/// Validate a memo key suffix.
///
/// Same character rules as field keys; may start with any of them.
///
/// # Errors
///
/// Returns `ValidationError` if the suffix is empty or has invalid characters.
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }
    check_chars(suffix)
}

fn check_chars(key: &str) -> Result<()> {
    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '_' | '-' | '.') {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, '_', '-' and '.' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
