use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads configuration and sets up logging
///
/// The configuration file is taken from the `CONFIG_PATH` environment variable,
/// falling back to `config.toml` in the working directory.
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or(DEFAULT_CONFIG_PATH.to_string());

    let config = load_config(&config_path)?;
    setup_logger(&config.general)?;

    info!("weatherreport version: {}", env!("CARGO_PKG_VERSION"));
    info!("configuration loaded from {}", config_path);

    Ok(config)
}
