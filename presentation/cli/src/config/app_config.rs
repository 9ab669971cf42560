use super::{api_config::ApiConfig, listing_config::ListingConfig, session_config::SessionConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub listing: ListingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            session: SessionConfig::from_env(),
            listing: ListingConfig::from_env(),
        }
    }
}
