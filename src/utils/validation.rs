// Validation utilities for request fields

use crate::utils::api_error::ApiError;

/// Trim a required string field
///
/// # Arguments
/// * `field` - The field as received, `None` when absent from the body
/// * `missing` - Error message when the field is absent
/// * `empty` - Error message when the field is blank after trimming
///
/// # Returns
/// * `Ok(String)` - The trimmed value
/// * `Err(ApiError::BadRequest)` - With the matching message
pub fn require_trimmed(field: Option<&str>, missing: &str, empty: &str) -> Result<String, ApiError> {
    let value = field.ok_or_else(|| ApiError::bad_request(missing))?;
    trim_and_validate_field(value, true).map_err(|_| ApiError::bad_request(empty))
}

/// Trim and validate string fields
///
/// # Arguments
/// * `field` - The string field to validate
/// * `required` - Whether the field is required (cannot be empty)
///
/// # Returns
/// * `Ok(String)` - The trimmed string if valid
/// * `Err(String)` - Error message if validation fails
pub fn trim_and_validate_field(field: &str, required: bool) -> Result<String, String> {
    let trimmed = field.trim().to_string();
    if trimmed.is_empty() && required {
        Err("Field cannot be empty".to_string())
    } else {
        Ok(trimmed)
    }
}
