//! Shared domain types and configuration for the promo carousel.

pub mod app_config;
pub mod config;
pub mod pricing;
pub mod products;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{calculate_discount, format_price};
pub use products::{find_product, Favorites, Product};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
