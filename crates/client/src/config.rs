//! Client configuration.
//!
//! # Environment Variables
//!
//! - `SHOPLINK_API_URL` - Backend base URL including the `/api` prefix
//!   (default: `http://localhost:5000/api`)
//! - `SHOPLINK_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend base path, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings for constructing a [`crate::ShopLinkClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build a config with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if the URL does not parse.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPLINK_API_URL".to_owned(), e.to_string())
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPLINK_API_URL".to_owned(),
                format!("unsupported scheme: {}", parsed.scheme()),
            ));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            ..Self::default()
        })
    }

    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a set variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("SHOPLINK_API_URL") {
            Ok(base_url) => Self::with_base_url(&base_url)?,
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var("SHOPLINK_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("SHOPLINK_TIMEOUT_SECS".to_owned(), raw)
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::with_base_url("https://shoplink.example/api/").expect("config");
        assert_eq!(config.base_url, "https://shoplink.example/api");
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        assert!(ClientConfig::with_base_url("ftp://shoplink.example/api").is_err());
        assert!(ClientConfig::with_base_url("not a url").is_err());
    }

    #[test]
    fn default_points_at_development_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
