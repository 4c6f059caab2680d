use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_CATALOG_PATH: &str = "../data.json";

pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", DEFAULT_PORT)?,
            catalog_path: try_load("CATALOG_PATH", DEFAULT_CATALOG_PATH)?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

pub(crate) fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");

            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
