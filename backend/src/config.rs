//! Configuration management for ZenTrip Atlas
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with ATLAS_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Outbound email configuration
    pub email: EmailConfig,

    /// Analytics rate limiting configuration
    pub analytics: AnalyticsConfig,

    /// Admin dashboard configuration
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// From address for outbound mail
    pub from: String,

    /// Resend API key; when absent, mail is logged instead of sent
    pub resend_api_key: Option<String>,

    /// Resend API endpoint
    pub api_endpoint: String,

    /// Whether new subscribers must confirm before receiving digests
    pub confirm_required: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Max tracked events per IP per window
    pub rate_limit_max: u32,

    /// Rate limit window length in seconds
    pub rate_limit_window_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    /// Shared secret for the analytics dashboard; the dashboard is
    /// disabled entirely when unset
    pub secret: Option<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ATLAS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("email.from", "noreply@zentripatlas.com")?
            .set_default("email.api_endpoint", "https://api.resend.com/emails")?
            .set_default("email.confirm_required", false)?
            .set_default("analytics.rate_limit_max", 30)?
            .set_default("analytics.rate_limit_window_secs", 60)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ATLAS_ prefix)
            .add_source(
                Environment::with_prefix("ATLAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
