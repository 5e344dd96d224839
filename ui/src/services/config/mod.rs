mod unified_config;

pub use unified_config::*;

use std::sync::OnceLock;
use tracing::warn;

static GLOBAL_CONFIG: OnceLock<LoginAppConfig> = OnceLock::new();

/// Get the global configuration, or the defaults if none was installed
pub fn get_global_config() -> LoginAppConfig {
    GLOBAL_CONFIG
        .get_or_init(LoginAppConfig::default)
        .clone()
}

/// Install the configuration once at startup. Returns `false` if one was
/// already installed or the given config does not validate.
pub fn init_global_config(config: LoginAppConfig) -> bool {
    if let Err(errors) = config.validate() {
        warn!(errors = %errors.join("; "), "rejecting invalid configuration");
        return false;
    }
    GLOBAL_CONFIG.set(config).is_ok()
}
