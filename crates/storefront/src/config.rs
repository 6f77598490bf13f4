//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LUMINA_HOST` - Bind address (default: 127.0.0.1)
//! - `LUMINA_PORT` - Listen port (default: 3000)
//! - `LUMINA_ORIGIN` - Site origin the basket store is scoped to
//!   (default: `http://<host>:<port>`)
//! - `LUMINA_DATA_DIR` - Root directory of the durable store (default: .lumina)
//! - `LUMINA_BASKET_KEY` - Key of the basket document (default: luminaBasket)
//! - `LUMINA_STATIC_DIR` - Static assets, product images under `images/`
//!   (default: crates/storefront/static)
//! - `LUMINA_HERO_INTERVAL_SECS` - Hero carousel rotation period, 0 disables (default: 5)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::store::BASKET_KEY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origin that scopes the durable store
    pub origin: String,
    /// Root directory of the durable store
    pub data_dir: PathBuf,
    /// Key the basket document is stored under
    pub basket_key: String,
    /// Static asset directory
    pub static_dir: PathBuf,
    /// Hero carousel rotation period; `None` disables rotation
    pub hero_interval: Option<Duration>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or("LUMINA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMINA_HOST".to_string(), e.to_string()))?;
        let port = get_or("LUMINA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMINA_PORT".to_string(), e.to_string()))?;
        let origin = lookup("LUMINA_ORIGIN")
            .unwrap_or_else(|| format!("http://{}", SocketAddr::new(host, port)));
        let data_dir = PathBuf::from(get_or("LUMINA_DATA_DIR", ".lumina"));

        let basket_key = get_or("LUMINA_BASKET_KEY", BASKET_KEY);
        if basket_key.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "LUMINA_BASKET_KEY".to_string(),
                "cannot be empty".to_string(),
            ));
        }

        let static_dir = PathBuf::from(get_or("LUMINA_STATIC_DIR", "crates/storefront/static"));
        let hero_secs = get_or("LUMINA_HERO_INTERVAL_SECS", "5")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LUMINA_HERO_INTERVAL_SECS".to_string(), e.to_string())
            })?;
        let hero_interval = (hero_secs > 0).then(|| Duration::from_secs(hero_secs));

        Ok(Self {
            host,
            port,
            origin,
            data_dir,
            basket_key,
            static_dir,
            hero_interval,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
