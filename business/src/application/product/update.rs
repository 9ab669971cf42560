use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::navigation::{AppRoute, Navigator};
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::model::{Product, ProductChanges, ProductChangesProps};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let changes = ProductChanges::new(ProductChangesProps {
            id: params.id,
            name: params.name,
            description: params.description,
            price: params.price,
            category_id: params.category_id,
            image_url: params.image_url,
        })
        .inspect_err(|e| self.logger.warn(&format!("Update rejected: {}", e)))?;

        self.logger
            .info(&format!("Updating product: {}", changes.id));

        let product = self
            .gateway
            .update_product(&changes, params.method)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => ProductError::NotFound,
                other => ProductError::Gateway(other),
            })?;

        self.navigator.navigate(AppRoute::Products);

        self.logger.info(&format!("Product updated: {}", changes.id));
        Ok(product)
    }
}
