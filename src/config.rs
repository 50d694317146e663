use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// A `postgres://` or `sqlite:` connection string.
    pub database: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error opening configuration file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let config_string = fs::read_to_string(path)?;
        Config::parse(&config_string)
    }

    pub fn parse(config_string: &str) -> Result<Config, ConfigError> {
        Ok(serde_json::from_str(config_string)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
