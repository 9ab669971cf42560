use std::sync::Arc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::use_cases::require_session::RequireSessionUseCase;
use crate::domain::logger::Logger;
use crate::domain::navigation::{AppRoute, Navigator};
use crate::domain::session::model::Session;
use crate::domain::session::store::SessionStore;

pub struct RequireSessionUseCaseImpl {
    pub session: Arc<SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

impl RequireSessionUseCase for RequireSessionUseCaseImpl {
    fn execute(&self) -> Result<Session, AuthError> {
        let session = self.session.current();
        if !session.is_authenticated() {
            self.logger.warn("No session, redirecting to login");
            self.navigator.redirect(AppRoute::Login);
            return Err(AuthError::NotAuthenticated);
        }
        Ok(session)
    }
}
