// Core types for the login form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::config::FormConfig;
use crate::services::errors::ValidationError;

use super::form_validation::validate_with_rules;

/// The two inputs the login form collects
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// Form control name, also used as the element id
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// Validated credential pair handed to the `on_login` callback
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-field validation errors. A field without an error is `None`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Email => self.email.as_ref(),
            Field::Password => self.password.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match field {
            Field::Email => self.email = error,
            Field::Password => self.password = error,
        }
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, None);
    }

    /// User-facing message for a field, if it has an error
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

/// Lifecycle phase derived from `LoginState::submitting`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginPhase {
    Idle,
    Submitting,
}

/// Result of a submit attempt
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// Validation passed; the snapshot is what `on_login` will receive
    Started(Credentials),
    /// Validation failed; errors are now stored on the state
    Rejected,
    /// A submission is already in flight
    AlreadySubmitting,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    SetErrors(FieldErrors),
    SetSubmitting(bool),
}

impl LoginAction {
    pub fn set_field(field: Field, value: String) -> Self {
        match field {
            Field::Email => LoginAction::SetEmail(value),
            Field::Password => LoginAction::SetPassword(value),
        }
    }
}

/// Local state of one login form instance
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl LoginState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    pub fn phase(&self) -> LoginPhase {
        if self.submitting {
            LoginPhase::Submitting
        } else {
            LoginPhase::Idle
        }
    }

    /// Store a new field value and drop that field's error, leaving the other alone
    pub fn on_field_change(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
        if self.errors.get(field).is_some() {
            self.errors.clear(field);
        }
    }

    /// Validate and, if clean, move into the submitting phase.
    ///
    /// Only one submission may be in flight: a call while `submitting` is
    /// refused without re-validating.
    pub fn begin_submit(&mut self, rules: &FormConfig) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::AlreadySubmitting;
        }

        let errors = validate_with_rules(self, rules);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        self.submitting = true;
        SubmitOutcome::Started(self.credentials())
    }

    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetEmail(email) => self.on_field_change(Field::Email, email),
            LoginAction::SetPassword(password) => self.on_field_change(Field::Password, password),
            LoginAction::SetErrors(errors) => {
                self.errors = errors;
            }
            LoginAction::SetSubmitting(submitting) => {
                self.submitting = submitting;
            }
        }
    }
}
