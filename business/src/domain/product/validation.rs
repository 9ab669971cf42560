use super::errors::ValidationError;

/// Minimum number of characters of a product name once trimmed.
pub const MIN_NAME_LENGTH: usize = 2;

/// Checks the trimmed name length. Blank names are reported separately from short ones.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    Ok(trimmed.to_string())
}

/// Parses a raw price input. Only finite numbers strictly greater than zero pass.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or(ValidationError::InvalidPrice)
}

pub fn require_category(category_id: Option<&str>) -> Result<String, ValidationError> {
    category_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::CategoryMissing)
}

/// An absolute URL: it parses and carries both a scheme and a non-empty host.
pub fn is_absolute_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|url| !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

/// Case-insensitive `http://` or `https://` prefix.
pub fn has_http_scheme(raw: &str) -> bool {
    let lower = raw.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
