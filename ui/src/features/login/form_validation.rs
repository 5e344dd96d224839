use regex::Regex;
use std::sync::LazyLock;

use crate::services::config::FormConfig;
use crate::services::errors::ValidationError;

use super::types::{Field, FieldErrors, LoginState};

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// local@domain.tld, domain needs a dot and the TLD at least two letters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Checks an email address. The value is not trimmed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingField { field: Field::Email });
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_password(password: &str, min_length: usize) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingField {
            field: Field::Password,
        });
    }

    // Same unit as a browser string's `length`
    if password.encode_utf16().count() < min_length {
        return Err(ValidationError::PasswordTooShort { min_length });
    }

    Ok(())
}

/// Validates both fields with the default rules
pub fn validate(state: &LoginState) -> FieldErrors {
    validate_with_rules(state, &FormConfig::default())
}

/// Validates both fields; fields that pass are absent from the result
pub fn validate_with_rules(state: &LoginState, rules: &FormConfig) -> FieldErrors {
    FieldErrors {
        email: validate_email(&state.email).err(),
        password: validate_password(&state.password, rules.min_password_length).err(),
    }
}
