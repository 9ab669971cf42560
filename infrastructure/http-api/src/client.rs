use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;
use business::domain::logger::Logger;
use business::domain::navigation::{AppRoute, Navigator};
use business::domain::session::store::SessionStore;

use crate::config::ClientConfig;

/// Builds a reqwest client whose default headers carry the JSON content type
/// and, when a token is given, the bearer authorization.
pub fn build_client(token: Option<&str>, timeout: Duration) -> Result<Client, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GatewayError::Unauthorized)?;
        headers.insert(AUTHORIZATION, value);
    }

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|_| GatewayError::Network)
}

pub fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Network
    }
}

pub fn map_status(status: StatusCode) -> Result<(), GatewayError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(GatewayError::unauthorized()),
        StatusCode::NOT_FOUND => Err(GatewayError::not_found()),
        other => Err(GatewayError::server(other.as_u16())),
    }
}

struct TokenClient {
    token: Option<String>,
    client: Client,
}

/// Authenticated access to the catalog service.
///
/// Every request reads the token from the shared [`SessionStore`]. A 401 on any
/// response clears the session and redirects to the login route before the
/// error is returned to the caller.
pub struct ApiClient {
    config: ClientConfig,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn Logger>,
    http: Mutex<Option<TokenClient>>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            config,
            session,
            navigator,
            logger,
            http: Mutex::new(None),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self.http()?.get(self.config.url(path));
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|_| GatewayError::InvalidResponse)
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http()?
            .request(method, self.config.url(path))
            .json(body);
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|_| GatewayError::InvalidResponse)
    }

    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let request = self.http()?.delete(self.config.url(path));
        self.execute(request).await?;
        Ok(())
    }

    /// Client for the current token; rebuilt only after the token changed.
    fn http(&self) -> Result<Client, GatewayError> {
        let token = self.session.token();
        let mut cached = self.http.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(current) = cached.as_ref()
            && current.token == token
        {
            return Ok(current.client.clone());
        }

        self.logger.debug("Building HTTP client for the current session");
        let client = build_client(token.as_deref(), self.config.timeout)?;
        *cached = Some(TokenClient {
            token,
            client: client.clone(),
        });
        Ok(client)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await.map_err(|e| {
            self.logger.error(&format!("Catalog request failed: {}", e));
            map_transport_error(e)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(GatewayError::unauthorized());
        }
        if let Err(e) = map_status(status) {
            self.logger.warn(&format!(
                "Catalog responded {} for {}",
                status,
                response.url().path()
            ));
            return Err(e);
        }
        Ok(response)
    }

    fn expire_session(&self) {
        self.logger
            .warn("Session rejected by the catalog service, signing out");
        self.session.clear_session();
        self.navigator.redirect(AppRoute::Login);
    }
}
