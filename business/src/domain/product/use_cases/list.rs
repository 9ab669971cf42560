use async_trait::async_trait;

use crate::domain::listing::query::{ListQuery, TotalCount};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub query: ListQuery,
}

/// One resolved listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub products: Vec<Product>,
    /// Page the results belong to; forced to 1 while searching.
    pub page: u32,
    /// New total knowledge, `None` when the response says nothing new.
    pub total: Option<TotalCount>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductListing, ProductError>;
}
