use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_slug::{
    GetProductBySlugParams, GetProductBySlugUseCase,
};

pub struct GetProductBySlugUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductBySlugUseCase for GetProductBySlugUseCaseImpl {
    async fn execute(&self, params: GetProductBySlugParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by slug: {}", params.slug));

        let product = self
            .gateway
            .get_product(&params.slug)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => ProductError::NotFound,
                other => ProductError::Gateway(other),
            })?;

        Ok(product)
    }
}
