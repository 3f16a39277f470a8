use crate::error::AppError;

/// Validate a trimmed name (1-256 Unicode characters).
pub fn validate_name(field: &str, name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{field} must be 1-256 characters"
        )));
    }
    Ok(())
}

/// Validate an email address. Only the presence of `@` is checked.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || email.chars().count() > 256 {
        return Err(AppError::Validation("Email must be a valid address".into()));
    }
    Ok(())
}

/// Validate an optional free-text field (at most 4096 characters).
pub fn validate_text(field: &str, text: &str) -> Result<(), AppError> {
    if text.chars().count() > 4096 {
        return Err(AppError::Validation(format!(
            "{field} must be at most 4096 characters"
        )));
    }
    Ok(())
}

/// Trim an optional string and drop it when blank.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
