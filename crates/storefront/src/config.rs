//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_STORE` - Hosted store domain (e.g., nautica-5-0.myshopify.com)
//! - `SHOPIFY_STOREFRONT_PUBLIC_TOKEN` - Storefront API public access token
//!   used by the Buy Button widget (safe to expose in the browser)
//!
//! ## Optional
//! - `NAUTIC_HOST` - Bind address (default: 127.0.0.1)
//! - `NAUTIC_PORT` - Listen port (default: 3000)
//! - `NAUTIC_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `NAUTIC_DATA_DIR` - Catalog JSON directory (default: crates/storefront/data)
//! - `NAUTIC_CONTENT_DIR` - Markdown pages directory (default: crates/storefront/content)
//! - `NAUTIC_CATALOG_TTL_SECS` - Catalog cache TTL (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
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
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the catalog JSON collections
    pub data_dir: PathBuf,
    /// Directory holding markdown content pages
    pub content_dir: PathBuf,
    /// How long a parsed catalog collection stays cached
    pub catalog_ttl: Duration,
    /// Hosted commerce widget configuration
    pub shopify: ShopifyConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry trace sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Hosted commerce widget configuration.
///
/// Only public values live here: the Buy Button SDK runs in the browser and
/// receives both fields verbatim.
#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// Hosted store domain (e.g., nautica-5-0.myshopify.com)
    pub store: String,
    /// Storefront API public access token
    pub storefront_public_token: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_host(&get_env_or_default("NAUTIC_HOST", "127.0.0.1"))?;
        let port = parse_port(&get_env_or_default("NAUTIC_PORT", "3000"))?;
        let base_url = get_env_or_default("NAUTIC_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default(
            "NAUTIC_DATA_DIR",
            "crates/storefront/data",
        ));
        let content_dir = PathBuf::from(get_env_or_default(
            "NAUTIC_CONTENT_DIR",
            "crates/storefront/content",
        ));
        let catalog_ttl = parse_ttl_secs(&get_env_or_default("NAUTIC_CATALOG_TTL_SECS", "300"))?;

        let shopify = ShopifyConfig {
            store: get_env("SHOPIFY_STORE")?,
            storefront_public_token: get_env("SHOPIFY_STOREFRONT_PUBLIC_TOKEN")?,
        };

        let sentry_sample_rate =
            parse_sample_rate("SENTRY_SAMPLE_RATE", &get_env_or_default("SENTRY_SAMPLE_RATE", "1.0"))?;
        let sentry_traces_sample_rate = parse_sample_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            &get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0"),
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            content_dir,
            catalog_ttl,
            shopify,
            sentry_dsn: get_env_optional("SENTRY_DSN"),
            sentry_environment: get_env_optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an optional environment variable, treating the empty string as unset.
fn get_env_optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    raw.parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar("NAUTIC_HOST".to_string(), e.to_string()))
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("NAUTIC_PORT".to_string(), e.to_string()))
}

fn parse_ttl_secs(raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar("NAUTIC_CATALOG_TTL_SECS".to_string(), e.to_string()))
}

fn parse_sample_rate(name: &str, raw: &str) -> Result<f32, ConfigError> {
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            format!("{rate} is outside 0.0..=1.0"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_values() {
        assert_eq!(
            parse_host("0.0.0.0").expect("valid host"),
            "0.0.0.0".parse::<IpAddr>().expect("ip")
        );
        assert_eq!(parse_port("8080").expect("valid port"), 8080);
        assert_eq!(
            parse_ttl_secs("60").expect("valid ttl"),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(parse_host("not-an-ip").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_ttl_secs("-1").is_err());
        assert!(parse_sample_rate("SENTRY_SAMPLE_RATE", "1.5").is_err());
        assert!(parse_sample_rate("SENTRY_SAMPLE_RATE", "abc").is_err());
    }

    #[test]
    fn sample_rate_bounds_are_inclusive() {
        assert_eq!(
            parse_sample_rate("SENTRY_SAMPLE_RATE", "0.0").expect("zero"),
            0.0
        );
        assert_eq!(
            parse_sample_rate("SENTRY_SAMPLE_RATE", "1.0").expect("one"),
            1.0
        );
    }

    #[test]
    fn error_messages_name_the_variable() {
        let err = parse_port("x").expect_err("invalid port");
        assert!(err.to_string().contains("NAUTIC_PORT"));
    }
}
