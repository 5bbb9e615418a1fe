//! Builds an `AppConfig` by layering config files and environment variables with `figment`.

mod data;
mod error;

// Re-export config structs
pub use data::{AppConfig, CatalogConfig, Environment, NetConfig, StaticConfig};
pub use error::{ConfigError, ConfigResult};
