//! The configuration structs used to build the AppConfig, and their impls.
use std::{net::SocketAddr, path::Path};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub site_config: SiteConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// Everything the landing page needs to render itself.
#[derive(Deserialize, Clone, Debug)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    /// Looping hero clip shown in place of the hero image, paused for reduced-motion users.
    pub hero_video: Option<String>,
    /// Glob handed to `tera` when loading the templates.
    pub templates_glob: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    pub products: Vec<Product>,
}

/// A single card in the product slider.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub img: String,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Merges `base.toml`, `{environment}.toml` (both from `config_dir`) and `APP_` prefixed
    /// environment variables, in that order. Nested keys are separated by `__`,
    /// e.g. `APP_NET_CONFIG__APP_PORT=9000`.
    pub fn load_from(config_dir: &Path, environment: Environment) -> ConfigResult<Self> {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config: AppConfig = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        if config.site_config.products.is_empty() {
            return Err(ConfigError::EmptyCatalogue);
        }

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
