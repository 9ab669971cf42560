use std::env;
use std::time::Duration;

use business::application::listing::controller::DEFAULT_DEBOUNCE;

#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub debounce: Duration,
}

impl ListingConfig {
    /// Environment variables:
    /// - CATALOG_DEBOUNCE_MS: Delay before a query change hits the service (default: 350)
    pub fn from_env() -> Self {
        let debounce = env::var("CATALOG_DEBOUNCE_MS")
            .ok()
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE);

        Self { debounce }
    }
}
