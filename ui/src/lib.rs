//! This crate contains the login page, its headless form core and configuration.

pub mod app;
pub use app::LoginPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use features::login::Credentials;
pub use services::config::LoginAppConfig;
