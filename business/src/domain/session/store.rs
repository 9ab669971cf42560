use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::logger::Logger;

use super::model::Session;
use super::storage::SessionStorage;

/// Single shared holder of the current session.
///
/// Every write is persisted through the [`SessionStorage`] port and published to
/// subscribers, so navigation chrome can toggle its authenticated view. Storage
/// failures are logged; the in-memory value always wins.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<Session>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new(storage: Arc<dyn SessionStorage>, logger: Arc<dyn Logger>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            storage,
            logger,
            state,
        }
    }

    /// Creates a store seeded with whatever the storage persisted last time.
    pub fn restore(storage: Arc<dyn SessionStorage>, logger: Arc<dyn Logger>) -> Self {
        let session = match storage.load() {
            Ok(session) => session,
            Err(e) => {
                logger.warn(&format!("Could not restore session: {}", e));
                Session::default()
            }
        };
        let (state, _) = watch::channel(session);
        Self {
            storage,
            logger,
            state,
        }
    }

    pub fn set_session(&self, token: impl Into<String>, email: impl Into<String>) {
        let session = Session::new(token, email);
        if let Err(e) = self.storage.save(&session) {
            self.logger
                .warn(&format!("Could not persist session: {}", e));
        }
        self.logger.debug("Session updated");
        self.state.send_replace(session);
    }

    pub fn clear_session(&self) {
        if let Err(e) = self.storage.clear() {
            self.logger
                .warn(&format!("Could not erase persisted session: {}", e));
        }
        self.logger.debug("Session cleared");
        self.state.send_replace(Session::default());
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn email(&self) -> Option<String> {
        self.state.borrow().email.clone()
    }

    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver notified on every `set_session` / `clear_session`.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}
