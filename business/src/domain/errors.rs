/// Errors raised by the remote catalog service adapters.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.unauthorized")]
    Unauthorized,
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.timeout")]
    Timeout,
    #[error("gateway.network")]
    Network,
    #[error("gateway.server_error")]
    Server(u16),
    #[error("gateway.invalid_response")]
    InvalidResponse,
}

/// How a failure is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Local, user-correctable, never sent to the network.
    Validation,
    /// Session rejected by the service; only a new login recovers.
    Auth,
    /// Transport or server failure; the operation is abandoned.
    Network,
    /// Missing product or category; rendered as an empty state.
    NotFound,
}

impl GatewayError {
    pub fn unauthorized() -> Self {
        GatewayError::Unauthorized
    }
    pub fn not_found() -> Self {
        GatewayError::NotFound
    }
    pub fn server(status: u16) -> Self {
        GatewayError::Server(status)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::Unauthorized => ErrorCategory::Auth,
            GatewayError::NotFound => ErrorCategory::NotFound,
            GatewayError::Timeout
            | GatewayError::Network
            | GatewayError::Server(_)
            | GatewayError::InvalidResponse => ErrorCategory::Network,
        }
    }
}
