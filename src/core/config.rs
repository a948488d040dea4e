//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Interface the server binds when `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the server binds when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got '{0}'")]
    InvalidPort(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to listen on
    /// Example: 127.0.0.1
    pub host: String,

    /// TCP port to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables (`HOST`, `PORT`).
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Build a config from raw values; blank values fall back to defaults
    pub fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };

        Ok(Self { host, port })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
