use std::sync::Arc;

use crate::domain::auth::use_cases::logout::LogoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::navigation::{AppRoute, Navigator};
use crate::domain::session::store::SessionStore;

pub struct LogoutUseCaseImpl {
    pub session: Arc<SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

impl LogoutUseCase for LogoutUseCaseImpl {
    fn execute(&self) {
        self.logger.info("Signing out");
        self.session.clear_session();
        self.navigator.navigate(AppRoute::Login);
    }
}
