use std::env;
use std::time::Duration;

use http_api::ClientConfig;
use http_api::config::{DEFAULT_BASE_URL, DEFAULT_LOGIN_TIMEOUT, DEFAULT_TIMEOUT};

/// Catalog service endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub login_timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the catalog service (default: "https://api.bitechx.com")
    /// - CATALOG_API_TIMEOUT_SECS: Timeout of authenticated calls (default: 15)
    /// - CATALOG_LOGIN_TIMEOUT_SECS: Timeout of the login call (default: 10)
    pub fn from_env() -> Self {
        let base_url =
            env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = secs_or(env::var("CATALOG_API_TIMEOUT_SECS").ok(), DEFAULT_TIMEOUT);
        let login_timeout = secs_or(
            env::var("CATALOG_LOGIN_TIMEOUT_SECS").ok(),
            DEFAULT_LOGIN_TIMEOUT,
        );

        Self {
            base_url,
            timeout,
            login_timeout,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout,
            login_timeout: self.login_timeout,
            ..ClientConfig::new(self.base_url.clone())
        }
    }
}

fn secs_or(raw: Option<String>, default: Duration) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(default)
}
