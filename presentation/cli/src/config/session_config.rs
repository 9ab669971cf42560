use std::env;
use std::path::PathBuf;

/// Where the session survives between runs
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_SESSION_FILE: Session file path (default: "<config dir>/catalog/session.json")
    pub fn from_env() -> Self {
        let file = env::var("CATALOG_SESSION_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Self { file }
    }
}

fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("catalog")
        .join("session.json")
}
