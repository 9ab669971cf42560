use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::listing::query::{TotalCount, infer_total};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::CatalogGateway;
use crate::domain::product::use_cases::list::{
    ListProductsParams, ListProductsUseCase, ProductListing,
};

/// Resolves one [`ListQuery`](crate::domain::listing::query::ListQuery) against the catalog.
///
/// Search mode calls the search endpoint and filters by category locally, since the
/// endpoint has no category parameter. Otherwise the server pages the listing.
pub struct ListProductsUseCaseImpl {
    pub gateway: Arc<dyn CatalogGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductListing, ProductError> {
        let query = params.query;

        if let Some(term) = query.search_term() {
            self.logger.info(&format!("Searching products: {}", term));
            let found = self.gateway.search_products(term).await?;
            let products: Vec<_> = found
                .into_iter()
                .filter(|p| query.category.matches(p.category.as_ref()))
                .collect();
            let total = TotalCount::Exact(products.len());
            self.logger
                .info(&format!("Search matched {} products", products.len()));
            return Ok(ProductListing {
                products,
                page: 1,
                total: Some(total),
            });
        }

        let request = query.page_request();
        self.logger.info(&format!(
            "Fetching products offset={} limit={}",
            request.offset, request.limit
        ));
        let products = self.gateway.list_products(&request).await?;
        let total = infer_total(&request, products.len());

        Ok(ProductListing {
            products,
            page: query.page,
            total,
        })
    }
}
