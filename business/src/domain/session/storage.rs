use super::model::Session;

/// Fixed key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "catalog_token";
/// Fixed key under which the account email is persisted.
pub const EMAIL_KEY: &str = "catalog_email";

#[derive(Debug, thiserror::Error)]
pub enum SessionStorageError {
    #[error("session_storage.read_failed")]
    Read,
    #[error("session_storage.write_failed")]
    Write,
    #[error("session_storage.corrupted")]
    Corrupted,
}

/// Durable client storage for the session (a file, the browser's local storage...).
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Session, SessionStorageError>;
    fn save(&self, session: &Session) -> Result<(), SessionStorageError>;
    fn clear(&self) -> Result<(), SessionStorageError>;
}
