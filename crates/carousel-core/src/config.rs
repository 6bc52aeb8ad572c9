use std::path::PathBuf;

use crate::app_config::{
    AppConfig, DEFAULT_ANCHOR_SELECTOR, DEFAULT_API_URL, DEFAULT_CACHE_KEY, DEFAULT_FAVORITES_KEY,
    DEFAULT_TITLE,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so tests
/// can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let api_url = non_empty("CAROUSEL_API_URL", DEFAULT_API_URL)?;
    let cache_key = non_empty("CAROUSEL_CACHE_KEY", DEFAULT_CACHE_KEY)?;
    let favorites_key = non_empty("CAROUSEL_FAVORITES_KEY", DEFAULT_FAVORITES_KEY)?;
    if cache_key == favorites_key {
        return Err(ConfigError::InvalidEnvVar {
            var: "CAROUSEL_FAVORITES_KEY".to_string(),
            reason: format!("collides with cache key \"{cache_key}\""),
        });
    }

    let anchor_selector = non_empty("CAROUSEL_ANCHOR_SELECTOR", DEFAULT_ANCHOR_SELECTOR)?;
    let title = or_default("CAROUSEL_TITLE", DEFAULT_TITLE);
    let storage_path = PathBuf::from(or_default(
        "CAROUSEL_STORAGE_PATH",
        "./.carousel/local_storage.json",
    ));
    let request_timeout_secs = parse_positive_u64("CAROUSEL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CAROUSEL_USER_AGENT", "promo-carousel/0.1");
    let log_level = or_default("CAROUSEL_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_url,
        cache_key,
        favorites_key,
        anchor_selector,
        title,
        storage_path,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
