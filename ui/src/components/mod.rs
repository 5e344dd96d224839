//! User Interface Components
//!
//! Reusable Dioxus components for the login page:
//!
//! - **forms**: The login form itself
//! - **display**: Inline field errors and the busy spinner
//! - **input**: Labeled, validation-aware input controls

pub mod display;
pub mod forms;
pub mod input;
