use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use business::domain::session::model::Session;
use business::domain::session::storage::{
    EMAIL_KEY, SessionStorage, SessionStorageError, TOKEN_KEY,
};

/// Process-local key/value storage, for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemorySessionStorage {
    entries: Mutex<BTreeMap<&'static str, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn load(&self) -> Result<Session, SessionStorageError> {
        Ok(Session::new(
            self.get(TOKEN_KEY).unwrap_or_default(),
            self.get(EMAIL_KEY).unwrap_or_default(),
        ))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
        if let Some(token) = &session.token {
            entries.insert(TOKEN_KEY, token.clone());
        }
        if let Some(email) = &session.email {
            entries.insert(EMAIL_KEY, email.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
