//! Unified Configuration for the Login Page
//!
//! Theme colors, form rules and branding in one serde-friendly structure.
//! Every section falls back to its defaults when omitted from JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::features::login::MIN_PASSWORD_LENGTH;
use crate::services::errors::ConfigError;

/// Unified configuration for the login page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoginAppConfig {
    /// Semantic colors consumed by the rendering layer
    pub theme: ThemeConfig,

    /// Validation and submission behaviour
    pub form: FormConfig,

    /// Product name and copy shown around the form
    pub branding: BrandingConfig,
}

/// Semantic color names mapped to hex values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Form rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated network latency before `on_login` fires
    pub submit_delay_ms: u64,

    /// Minimum password length in UTF-16 code units
    pub min_password_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub product_name: String,
    pub tagline: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#2a5298".to_string(),
            secondary: "#1e3c72".to_string(),
            accent: "#f4b400".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product_name: "Kavia Ai".to_string(),
            tagline: "Sign in to your account".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn colors(&self) -> [(&'static str, &str); 3] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
        ]
    }

    /// CSS custom properties for the page root's `style` attribute
    pub fn to_css_variables(&self) -> String {
        self.colors()
            .iter()
            .map(|(name, value)| format!("--login-{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl BrandingConfig {
    pub fn title(&self) -> String {
        format!("{} Login", self.product_name)
    }
}

/// `#rgb` or `#rrggbb`
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

impl LoginAppConfig {
    /// Parse JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (name, value) in self.theme.colors() {
            if !is_hex_color(value) {
                errors.push(format!("Theme color {} must be a hex color, got {:?}", name, value));
            }
        }

        if self.form.submit_delay_ms == 0 {
            errors.push("Form submit_delay_ms must be greater than 0".to_string());
        }

        if self.form.min_password_length == 0 {
            errors.push("Form min_password_length must be greater than 0".to_string());
        }

        if self.branding.product_name.trim().is_empty() {
            errors.push("Branding product_name must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = LoginAppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form.submit_delay(), Duration::from_millis(1000));
        assert_eq!(config.form.min_password_length, 6);
    }

    #[test]
    fn test_invalid_config() {
        let mut config = LoginAppConfig::default();
        config.theme.accent = "yellow".to_string();
        config.form.submit_delay_ms = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            LoginAppConfig::from_json(r##"{ "theme": { "accent": "#ffcb3a" } }"##).unwrap();
        assert_eq!(config.theme.accent, "#ffcb3a");
        assert_eq!(config.theme.primary, "#2a5298");
        assert_eq!(config.form, FormConfig::default());
        assert_eq!(config.branding.title(), "Kavia Ai Login");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            LoginAppConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LoginAppConfig::from_json(r#"{ "form": { "min_password_length": 0 } }"#),
            Err(ConfigError::Invalid(errors)) if errors.len() == 1
        ));
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#2a5298"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("2a5298"));
        assert!(!is_hex_color("#2a529"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn test_css_variables() {
        assert_eq!(
            ThemeConfig::default().to_css_variables(),
            "--login-primary: #2a5298; --login-secondary: #1e3c72; --login-accent: #f4b400;"
        );
    }
}
