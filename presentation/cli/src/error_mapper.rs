use business::domain::auth::errors::AuthError;
use business::domain::errors::{ErrorCategory, GatewayError};
use business::domain::product::errors::ProductError;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Converts a domain error into the line shown to the user.
pub trait IntoUserMessage {
    fn user_message(&self) -> String;
}

impl IntoUserMessage for GatewayError {
    fn user_message(&self) -> String {
        let message = match self.category() {
            ErrorCategory::Auth => "Your session has expired. Please sign in again.",
            ErrorCategory::NotFound => "Not found.",
            ErrorCategory::Network if *self == GatewayError::Timeout => {
                "The catalog service did not answer in time. Please try again."
            }
            ErrorCategory::Network | ErrorCategory::Validation => GENERIC_FAILURE,
        };
        message.to_string()
    }
}

impl IntoUserMessage for ProductError {
    fn user_message(&self) -> String {
        match (self.category(), self) {
            (ErrorCategory::Validation, _) => self.to_string(),
            (ErrorCategory::NotFound, _) => "Product not found.".to_string(),
            (_, ProductError::Gateway(e)) => e.user_message(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl IntoUserMessage for AuthError {
    fn user_message(&self) -> String {
        match self {
            AuthError::InvalidEmail => self.to_string(),
            AuthError::NotAuthenticated => "Please sign in first.".to_string(),
            AuthError::InvalidResponse => "Login failed. Please try again.".to_string(),
            AuthError::Gateway(GatewayError::Timeout) => GatewayError::Timeout.user_message(),
            AuthError::Gateway(_) => "Login failed. Please try again.".to_string(),
        }
    }
}

/// Message for any error bubbling up to `main`.
pub fn describe(error: &anyhow::Error) -> String {
    if let Some(e) = error.downcast_ref::<ProductError>() {
        return e.user_message();
    }
    if let Some(e) = error.downcast_ref::<AuthError>() {
        return e.user_message();
    }
    if let Some(e) = error.downcast_ref::<GatewayError>() {
        return e.user_message();
    }
    error.to_string()
}
