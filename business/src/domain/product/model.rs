use chrono::{DateTime, Utc};

use super::errors::ValidationError;
use super::validation::{
    has_http_scheme, is_absolute_url, parse_price, require_category, validate_name,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Transient copy of a product owned by the remote catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category: Option<Category>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// Raw form input for a new product.
pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<String>,
    pub images: Vec<String>,
}

/// Validated creation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub price: f64,
    pub category_id: String,
}

impl NewProduct {
    /// Validates in form order: name, category, price, images present, images valid.
    pub fn new(props: NewProductProps) -> Result<Self, ValidationError> {
        let name = validate_name(&props.name)?;
        let category_id = require_category(props.category_id.as_deref())?;
        let price = parse_price(&props.price)?;

        if props.images.is_empty() {
            return Err(ValidationError::ImagesMissing);
        }
        if !props.images.iter().all(|url| is_absolute_url(url)) {
            return Err(ValidationError::InvalidImageUrls);
        }

        Ok(Self {
            name,
            description: props.description.trim().to_string(),
            images: props.images,
            price,
            category_id,
        })
    }
}

/// How an edit is sent to the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMethod {
    /// `PUT`, used by the full edit form.
    #[default]
    Replace,
    /// `PATCH`.
    Patch,
}

/// Raw form input for editing an existing product.
pub struct ProductChangesProps {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

/// Validated edit payload. `images` stays `None` when no URL was given.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Option<Vec<String>>,
    pub category_id: String,
}

impl ProductChanges {
    pub fn new(props: ProductChangesProps) -> Result<Self, ValidationError> {
        let name = validate_name(&props.name)?;
        let price = parse_price(&props.price)?;
        let category_id = require_category(props.category_id.as_deref())?;

        let image_url = props
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &image_url
            && !has_http_scheme(url)
        {
            return Err(ValidationError::ImageUrlScheme);
        }

        let id = props.id.trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::ProductIdMissing);
        }

        Ok(Self {
            id,
            name,
            description: props.description.trim().to_string(),
            price,
            images: image_url.map(|url| vec![url]),
            category_id,
        })
    }
}
