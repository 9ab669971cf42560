use serde::{Deserialize, Serialize};

/// The authenticated user's token/email pair held client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl Session {
    /// Builds a session, treating empty strings as absent values.
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: non_empty(token.into()),
            email: non_empty(email.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
