use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Category, NewProduct, Product, ProductChanges, UpdateMethod};

/// Server-side page of the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
    pub category_id: Option<String>,
}

/// Port to the remote catalog REST API.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list_products(&self, request: &PageRequest) -> Result<Vec<Product>, GatewayError>;
    async fn search_products(&self, text: &str) -> Result<Vec<Product>, GatewayError>;
    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError>;
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;
    async fn create_product(&self, product: &NewProduct) -> Result<Product, GatewayError>;
    async fn update_product(
        &self,
        changes: &ProductChanges,
        method: UpdateMethod,
    ) -> Result<Product, GatewayError>;
    async fn delete_product(&self, id: &str) -> Result<(), GatewayError>;
}
