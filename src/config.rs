//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): PostgreSQL connection string. When unset,
///   transactions are kept in memory and lost on restart.
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are converted: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}
