use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Category, NewProduct, Product, ProductChanges};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            slug: dto.slug,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            images: dto.images,
            category: dto.category.map(Category::from),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub images: &'a [String],
    pub price: f64,
    pub category_id: &'a str,
}

impl<'a> From<&'a NewProduct> for CreateProductRequest<'a> {
    fn from(product: &'a NewProduct) -> Self {
        Self {
            name: &product.name,
            description: &product.description,
            images: &product.images,
            price: product.price,
            category_id: &product.category_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<&'a [String]>,
    pub category_id: &'a str,
}

impl<'a> From<&'a ProductChanges> for UpdateProductRequest<'a> {
    fn from(changes: &'a ProductChanges) -> Self {
        Self {
            name: &changes.name,
            description: &changes.description,
            price: changes.price,
            images: changes.images.as_deref(),
            category_id: &changes.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_camel_case_product() {
        let dto: ProductDto = serde_json::from_value(json!({
            "id": "p-1",
            "slug": "red-hat",
            "name": "Red Hat",
            "price": 25,
            "images": ["https://cdn.example.com/hat.png"],
            "category": {"id": "cat1", "name": "Hats", "image": "x"},
            "createdAt": "2024-05-01T10:00:00.000Z"
        }))
        .unwrap();

        let product = Product::from(dto);

        assert_eq!(product.slug, "red-hat");
        assert_eq!(product.price, 25.0);
        assert_eq!(product.category_name(), Some("Hats"));
        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
        assert_eq!(product.description, "");
    }

    #[test]
    fn should_write_create_payload_with_category_id() {
        let product = NewProduct {
            name: "Red Hat".to_string(),
            description: "Warm".to_string(),
            images: vec!["https://cdn.example.com/hat.png".to_string()],
            price: 25.0,
            category_id: "cat1".to_string(),
        };

        let body = serde_json::to_value(CreateProductRequest::from(&product)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Red Hat",
                "description": "Warm",
                "images": ["https://cdn.example.com/hat.png"],
                "price": 25.0,
                "categoryId": "cat1"
            })
        );
    }

    #[test]
    fn should_omit_images_from_update_without_url() {
        let changes = ProductChanges {
            id: "p-1".to_string(),
            name: "Red Hat".to_string(),
            description: String::new(),
            price: 30.0,
            images: None,
            category_id: "cat1".to_string(),
        };

        let body = serde_json::to_value(UpdateProductRequest::from(&changes)).unwrap();

        assert!(body.get("images").is_none());
        assert_eq!(body["categoryId"], "cat1");
    }
}
