use crate::domain::auth::errors::AuthError;
use crate::domain::session::model::Session;

/// Guard run before any authenticated view is shown.
pub trait RequireSessionUseCase: Send + Sync {
    fn execute(&self) -> Result<Session, AuthError>;
}
