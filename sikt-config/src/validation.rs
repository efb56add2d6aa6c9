//! Custom validation functions for settings.
//!
//! Shared validation logic used across the settings modules.

use validator::ValidationError;

/// Validate a MySQL-style character set name.
pub fn validate_charset(charset: &str) -> Result<(), ValidationError> {
    let re = regex::Regex::new("^[a-z0-9_]+$").map_err(|_| ValidationError::new("invalid_regex"))?;

    if re.is_match(charset) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_charset"))
    }
}

/// Validate a database host specifier (hostname, IPv4, or host:port).
pub fn validate_host(host: &str) -> Result<(), ValidationError> {
    let valid = !host.is_empty()
        && host.len() <= 253
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_host"))
    }
}

/// Validate an opaque key/salt constant. The value itself is never
/// interpreted here; only its shape is checked.
pub fn validate_secret(secret: &str) -> Result<(), ValidationError> {
    if secret.len() >= 16 {
        Ok(())
    } else {
        Err(ValidationError::new("secret_too_short"))
    }
}
