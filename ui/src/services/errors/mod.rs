use thiserror::Error;

use crate::features::login::Field;

/// Field-level validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required.", .field.label())]
    MissingField { field: Field },

    #[error("Email address is invalid.")]
    InvalidEmail,

    #[error("Password must be at least {min_length} characters.")]
    PasswordTooShort { min_length: usize },
}

/// Coarse classification of validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    InvalidFormat,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingField { .. } => ValidationErrorKind::MissingField,
            ValidationError::InvalidEmail | ValidationError::PasswordTooShort { .. } => {
                ValidationErrorKind::InvalidFormat
            }
        }
    }

    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField { field } => *field,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::PasswordTooShort { .. } => Field::Password,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
