//! Configuration types.

use crate::error::ConfigError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the wizard REST server.
    pub port: u16,
    /// Path to the local draft database file.
    pub db_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            db_path: "./data/merlion.db".to_string(),
        }
    }
}

impl AppConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Recognized variables: `MERLION_PORT`, `MERLION_DB_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match std::env::var("MERLION_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MERLION_PORT".to_string(),
                message: format!("not a valid port: {raw}"),
            })?,
            Err(_) => defaults.port,
        };
        let db_path = std::env::var("MERLION_DB_PATH").unwrap_or(defaults.db_path);
        Ok(Self { port, db_path })
    }
}
