use std::sync::Arc;

use async_trait::async_trait;

use business::domain::auth::gateway::AuthGateway;
use business::domain::auth::value_objects::Email;
use business::domain::errors::GatewayError;
use business::domain::logger::Logger;

use crate::client::{build_client, map_status, map_transport_error};
use crate::config::ClientConfig;
use crate::dto::{LoginRequest, LoginResponse};
use crate::routes;

/// Calls `POST /auth` with its own short timeout and without the session
/// interceptor, since no session exists yet.
pub struct HttpAuthGateway {
    config: ClientConfig,
    logger: Arc<dyn Logger>,
}

impl HttpAuthGateway {
    pub fn new(config: ClientConfig, logger: Arc<dyn Logger>) -> Self {
        Self { config, logger }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &Email) -> Result<String, GatewayError> {
        let client = build_client(None, self.config.login_timeout)?;
        let response = client
            .post(self.config.url(routes::AUTH))
            .json(&LoginRequest {
                email: email.as_str(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;

        if let Err(e) = map_status(response.status()) {
            self.logger
                .warn(&format!("Login rejected with {}", response.status()));
            return Err(e);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;
        Ok(body.token.unwrap_or_default())
    }
}
