use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::value_objects::Email;

/// Port to the authentication endpoint. Returns the raw token, possibly empty.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &Email) -> Result<String, GatewayError>;
}
