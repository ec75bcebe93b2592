//! Application settings loading.
//!
//! Settings come from an optional `config.toml` in the working directory,
//! with environment variables taking precedence (`DATABASE_URL`,
//! `RENTDESK_HOST`, `RENTDESK_PORT`). Everything has a sensible default so
//! the server starts with no configuration at all.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Database settings
    pub database: DatabaseConfig,
}

/// HTTP server bind settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind on
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Database connection settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: crate::config::database::get_database_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    /// The address string the server should bind to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Loads configuration from the given TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads the application configuration: `config.toml` if present, defaults
/// otherwise, then environment overrides on top.
pub fn load_app_configuration() -> Result<AppConfig> {
    let mut config = if Path::new("config.toml").exists() {
        load_config("config.toml")?
    } else {
        tracing::debug!("No config.toml found, using defaults");
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database.url = url;
    }
    if let Ok(host) = std::env::var("RENTDESK_HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("RENTDESK_PORT") {
        config.server.port = port.parse().map_err(|e| Error::Config {
            message: format!("Invalid RENTDESK_PORT value {port:?}: {e}"),
        })?;
    }

    Ok(config)
}
