use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Category;

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, ProductError>;
}
