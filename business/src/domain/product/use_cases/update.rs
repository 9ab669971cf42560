use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, UpdateMethod};

pub struct UpdateProductParams {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub method: UpdateMethod,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
