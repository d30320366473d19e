//! Server configuration loaded from environment variables.
//!
//! Blank variables count as unset and fall back to their defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use todolist_core::default_log_level;

pub const ENV_HOST: &str = "TODOLIST_HOST";
pub const ENV_PORT: &str = "TODOLIST_PORT";
pub const ENV_DB_PATH: &str = "TODOLIST_DB_PATH";
pub const ENV_STATIC_DIR: &str = "TODOLIST_STATIC_DIR";
pub const ENV_LOG_LEVEL: &str = "TODOLIST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TODOLIST_LOG_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_FILE_NAME: &str = "todolist.sqlite3";
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => {
                write!(f, "{ENV_PORT} must be a port number, got `{value}`")
            }
            Self::InvalidHost(value) => {
                write!(f, "{ENV_HOST} must be an IP address, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings for the `todolist` server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr only when `None`.
    pub log_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let port = match read(ENV_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let config = Self {
            host: read(ENV_HOST).unwrap_or(defaults.host),
            port,
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            static_dir: read(ENV_STATIC_DIR).map_or(defaults.static_dir, PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR),
        };
        config.bind_addr()?;
        Ok(config)
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
