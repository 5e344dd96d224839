//! Infrastructure Services
//!
//! - **config**: Theme, form rules and branding, with a global instance
//! - **errors**: Validation and configuration error types

pub mod config;
pub mod errors;
