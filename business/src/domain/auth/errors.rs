use crate::domain::errors::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("auth.not_authenticated")]
    NotAuthenticated,
    #[error("auth.invalid_response")]
    InvalidResponse,
    #[error("auth.gateway")]
    Gateway(#[from] GatewayError),
}
