use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::session::model::Session;

pub struct LoginParams {
    pub email: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<Session, AuthError>;
}
