//! Login Form Core
//!
//! Headless state, validation and submission for the login form. Nothing in
//! here touches Dioxus; the component in `components::forms` drives it
//! through `LoginState::reduce_in_place`.

pub mod form_validation;
pub mod submission;
pub mod types;

pub use form_validation::*;
pub use submission::{complete_submission, LoginBackend, PendingSubmission, SimulatedLogin};
pub use types::*;
