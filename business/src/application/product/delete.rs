use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.gateway
            .delete_product(&params.id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound => ProductError::NotFound,
                other => ProductError::Gateway(other),
            })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::gateway::PageRequest;
    use crate::domain::product::model::{
        Category, NewProduct, Product, ProductChanges, UpdateMethod,
    };
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CatalogGateway for Gateway {
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
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_issue_one_delete_with_the_given_id() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_product()
            .with(eq("p-1"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: "p-1".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_product()
            .returning(|_| Err(GatewayError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: "missing".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_unauthorized() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_delete_product()
            .returning(|_| Err(GatewayError::Unauthorized));

        let use_case = DeleteProductUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: "p-1".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Gateway(GatewayError::Unauthorized)
        ));
    }
}
