use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::{CatalogGateway, PageRequest};
use business::domain::product::model::{
    Category, NewProduct, Product, ProductChanges, UpdateMethod,
};

use crate::client::ApiClient;
use crate::dto::{CategoryDto, CreateProductRequest, ProductDto, UpdateProductRequest};
use crate::routes;

pub struct HttpCatalogGateway {
    client: Arc<ApiClient>,
}

impl HttpCatalogGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn into_products(dtos: Vec<ProductDto>) -> Vec<Product> {
        dtos.into_iter().map(Product::from).collect()
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_products(&self, request: &PageRequest) -> Result<Vec<Product>, GatewayError> {
        let dtos: Option<Vec<ProductDto>> = self
            .client
            .get_json(&routes::products_page(request))
            .await?;
        Ok(Self::into_products(dtos.unwrap_or_default()))
    }

    async fn search_products(&self, text: &str) -> Result<Vec<Product>, GatewayError> {
        let dtos: Option<Vec<ProductDto>> = self
            .client
            .get_json(&routes::products_search(text))
            .await?;
        Ok(Self::into_products(dtos.unwrap_or_default()))
    }

    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError> {
        let dto: ProductDto = self.client.get_json(&routes::product(slug)).await?;
        Ok(dto.into())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        let dtos: Option<Vec<CategoryDto>> = self.client.get_json(routes::CATEGORIES).await?;
        Ok(dtos
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, GatewayError> {
        let body = CreateProductRequest::from(product);
        let dto: ProductDto = self
            .client
            .send_json(Method::POST, routes::PRODUCTS, &body)
            .await?;
        Ok(dto.into())
    }

    async fn update_product(
        &self,
        changes: &ProductChanges,
        method: UpdateMethod,
    ) -> Result<Product, GatewayError> {
        let method = match method {
            UpdateMethod::Replace => Method::PUT,
            UpdateMethod::Patch => Method::PATCH,
        };
        let body = UpdateProductRequest::from(changes);
        let dto: ProductDto = self
            .client
            .send_json(method, &routes::product(&changes.id), &body)
            .await?;
        Ok(dto.into())
    }

    async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        self.client.delete(&routes::product(id)).await
    }
}
