//! The configuration structs used to build the AppConfig, and their impls.
use std::{net::SocketAddr, path::Path};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use strum_macros::AsRefStr;
use tracing::info;

use crate::config::{ConfigError, ConfigResult};

/// Environment variables with this prefix override values from the config files.
/// Nested keys are separated by a double underscore, e.g. `APP_NET_CONFIG__APP_PORT`.
const ENV_PREFIX: &str = "APP_";

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub static_config: StaticConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StaticConfig {
    /// Directory the front-end files are served from under `/static`.
    pub dir: String,
}

/// Where the activity catalog comes from at startup.
/// Without a `seed_file` the built-in catalog is used.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub seed_file: Option<String>,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Reads `config/base.toml` and `config/{environment}.toml` relative to the current directory.
    /// The environment is taken from `APP_ENVIRONMENT` and defaults to `local`.
    pub fn load() -> ConfigResult<Self> {
        let config_dir = std::env::current_dir()?.join("config");
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()?;
        info!(
            "{:<20} - Loading the {} configuration",
            "config",
            environment.as_ref()
        );

        Self::load_from_dir(config_dir, environment)
    }

    pub fn load_from_dir(config_dir: impl AsRef<Path>, environment: Environment) -> ConfigResult<Self> {
        let config_dir = config_dir.as_ref();
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }
}

impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.app_port))
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}
