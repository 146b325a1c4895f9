use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Clone)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct Security {
    pub api_token: String,
}

#[derive(Deserialize, Clone)]
pub struct WeatherApiParameters {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    pub web_server: WebServer,
    pub security: Security,
    pub weather_api: WeatherApiParameters,
    pub general: General,
}

fn default_base_url() -> String {
    "http://api.weatherapi.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and checks a configuration given as a toml string
///
/// # Arguments
///
/// * 'toml' - configuration content
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.security.api_token.is_empty() {
        return Err(ConfigError::from("security.api_token must not be empty"));
    }
    if config.weather_api.api_key.is_empty() {
        return Err(ConfigError::from("weather_api.api_key must not be empty"));
    }
    if config.weather_api.timeout_secs == 0 {
        return Err(ConfigError::from("weather_api.timeout_secs must be greater than zero"));
    }

    Ok(config)
}
