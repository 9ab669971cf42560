use crate::domain::errors::{ErrorCategory, GatewayError};

/// Local, pre-submit validation failures.
///
/// These are shown inline to the user, so the display text is the message itself
/// rather than a code identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please choose a category")]
    CategoryMissing,
    #[error("Price must be a number greater than 0")]
    InvalidPrice,
    #[error("Please add at least 1 image URL")]
    ImagesMissing,
    #[error("All image URLs must be valid")]
    InvalidImageUrls,
    #[error("Image URL must be a valid link")]
    InvalidImageUrl,
    #[error("Image URL must start with http or https")]
    ImageUrlScheme,
    #[error("Product id missing")]
    ProductIdMissing,
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("product.not_found")]
    NotFound,
    #[error("product.gateway")]
    Gateway(#[from] GatewayError),
}

impl ProductError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProductError::Validation(_) => ErrorCategory::Validation,
            ProductError::NotFound => ErrorCategory::NotFound,
            ProductError::Gateway(e) => e.category(),
        }
    }
}
