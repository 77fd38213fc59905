//! Validation utilities for ZenTrip Atlas

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let trimmed = email.trim();
    if trimmed.len() < 5 {
        return Err("Invalid email format");
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err("Invalid email format");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("Invalid email format");
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate country code format (ISO-2, uppercase alphabetic)
pub fn validate_country_code(code: &str) -> Result<(), &'static str> {
    if code.len() != 2 {
        return Err("Country code must be exactly 2 characters");
    }
    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err("Country code must be uppercase letters only");
    }
    Ok(())
}

/// Validate month number is in the calendar range
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(())
}

/// Clamp a month parameter into the calendar range
pub fn clamp_month(month: i64) -> u32 {
    month.clamp(1, 12) as u32
}
