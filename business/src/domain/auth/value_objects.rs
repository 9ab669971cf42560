use super::errors::AuthError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// An email address that passed the local format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let valid = regex::Regex::new(EMAIL_PATTERN)
            .map(|re| re.is_match(raw))
            .unwrap_or(false);
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(AuthError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
