//! Application configuration.
//!
//! Everything is read from environment variables (with `.env` support via
//! dotenvy in `main`), validated once at startup.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::auth::jwt::JwtConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Complete app configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub client: ClientConfig,
    pub cors_origins: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

/// Credential submitter configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the forms post their credentials to.
    pub base_url: String,
    /// Optional request timeout. Unset by default: a hung connection then
    /// blocks the submit until the connection dies.
    pub timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: None,
        }
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig {
        server: load_server_config(),
        jwt: JwtConfig::from_env(),
        client: load_client_config(),
        cors_origins: load_cors_origins(),
    };

    validate_config(&config)?;

    Ok(config)
}

fn load_server_config() -> ServerConfig {
    ServerConfig {
        bind_address: env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| ServerConfig::default().bind_address),
    }
}

fn load_client_config() -> ClientConfig {
    ClientConfig {
        base_url: env::var("AUTH_BASE_URL").unwrap_or_else(|_| ClientConfig::default().base_url),
        timeout: env::var("SUBMIT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs),
    }
}

fn load_cors_origins() -> Vec<String> {
    env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "*".to_string())
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.bind_address.is_empty() {
        return Err(ConfigError::Invalid("Bind address can't be empty".to_string()));
    }
    if config.client.base_url.is_empty() {
        return Err(ConfigError::Invalid("Client base URL can't be empty".to_string()));
    }
    if config.jwt.access_secret.is_empty() || config.jwt.refresh_secret.is_empty() {
        return Err(ConfigError::Invalid("JWT secrets can't be empty".to_string()));
    }
    Ok(())
}
