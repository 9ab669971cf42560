use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::navigation::{AppRoute, Navigator};
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let new_product = NewProduct::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            category_id: params.category_id,
            images: params.images,
        })
        .inspect_err(|e| self.logger.warn(&format!("Create rejected: {}", e)))?;

        self.logger
            .info(&format!("Creating product: {}", new_product.name));
        let product = self.gateway.create_product(&new_product).await?;

        let route = if product.slug.is_empty() {
            AppRoute::Products
        } else {
            AppRoute::ProductDetail {
                slug: product.slug.clone(),
            }
        };
        self.navigator.navigate(route);

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
