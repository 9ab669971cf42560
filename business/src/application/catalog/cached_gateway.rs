use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::{CatalogGateway, PageRequest};
use crate::domain::product::model::{Category, NewProduct, Product, ProductChanges, UpdateMethod};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Page(PageRequest),
    Search(String),
    Product(String),
    Categories,
}

impl CacheKey {
    fn is_list(&self) -> bool {
        matches!(self, CacheKey::Page(_) | CacheKey::Search(_))
    }
}

#[derive(Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Product),
    Categories(Vec<Category>),
}

/// Read-through cache in front of a [`CatalogGateway`].
///
/// Successful mutations drop the entries they make stale: creating a product
/// invalidates lists and categories, updating invalidates lists and details,
/// deleting invalidates lists and details. Failures are never cached.
pub struct CachedCatalogGateway {
    inner: Arc<dyn CatalogGateway>,
    logger: Arc<dyn Logger>,
    entries: Mutex<HashMap<CacheKey, CacheValue>>,
}

impl CachedCatalogGateway {
    pub fn new(inner: Arc<dyn CatalogGateway>, logger: Arc<dyn Logger>) -> Self {
        Self {
            inner,
            logger,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheValue>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, key: &CacheKey) -> Option<CacheValue> {
        let hit = self.entries().get(key).cloned();
        if hit.is_some() {
            self.logger.debug(&format!("Cache hit: {:?}", key));
        }
        hit
    }

    fn store(&self, key: CacheKey, value: CacheValue) {
        self.entries().insert(key, value);
    }

    fn invalidate(&self, lists: bool, details: bool, categories: bool) {
        self.entries().retain(|key, _| {
            let stale = (lists && key.is_list())
                || (details && matches!(key, CacheKey::Product(_)))
                || (categories && matches!(key, CacheKey::Categories));
            !stale
        });
    }
}

#[async_trait]
impl CatalogGateway for CachedCatalogGateway {
    async fn list_products(&self, request: &PageRequest) -> Result<Vec<Product>, GatewayError> {
        let key = CacheKey::Page(request.clone());
        if let Some(CacheValue::Products(products)) = self.lookup(&key) {
            return Ok(products);
        }
        let products = self.inner.list_products(request).await?;
        self.store(key, CacheValue::Products(products.clone()));
        Ok(products)
    }

    async fn search_products(&self, text: &str) -> Result<Vec<Product>, GatewayError> {
        let key = CacheKey::Search(text.to_string());
        if let Some(CacheValue::Products(products)) = self.lookup(&key) {
            return Ok(products);
        }
        let products = self.inner.search_products(text).await?;
        self.store(key, CacheValue::Products(products.clone()));
        Ok(products)
    }

    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError> {
        let key = CacheKey::Product(slug.to_string());
        if let Some(CacheValue::Product(product)) = self.lookup(&key) {
            return Ok(product);
        }
        let product = self.inner.get_product(slug).await?;
        self.store(key, CacheValue::Product(product.clone()));
        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        if let Some(CacheValue::Categories(categories)) = self.lookup(&CacheKey::Categories) {
            return Ok(categories);
        }
        let categories = self.inner.list_categories().await?;
        self.store(CacheKey::Categories, CacheValue::Categories(categories.clone()));
        Ok(categories)
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, GatewayError> {
        let created = self.inner.create_product(product).await?;
        self.invalidate(true, false, true);
        Ok(created)
    }

    async fn update_product(
        &self,
        changes: &ProductChanges,
        method: UpdateMethod,
    ) -> Result<Product, GatewayError> {
        let updated = self.inner.update_product(changes, method).await?;
        self.invalidate(true, true, false);
        Ok(updated)
    }

    async fn delete_product(&self, id: &str) -> Result<(), GatewayError> {
        self.inner.delete_product(id).await?;
        self.invalidate(true, true, false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

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

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: id.to_string(),
            name: "Red Hat".to_string(),
            description: String::new(),
            price: 25.0,
            images: vec![],
            category: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn first_page() -> PageRequest {
        PageRequest {
            offset: 0,
            limit: 10,
            category_id: None,
        }
    }

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Red Hat".to_string(),
            description: String::new(),
            images: vec!["https://cdn.example.com/hat.png".to_string()],
            price: 25.0,
            category_id: "cat1".to_string(),
        }
    }

    #[tokio::test]
    async fn should_serve_repeated_reads_from_cache() {
        let mut inner = MockGateway::new();
        inner
            .expect_list_products()
            .times(1)
            .returning(|_| Ok(vec![product("p-1")]));
        inner
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![]));

        let gateway = CachedCatalogGateway::new(Arc::new(inner), mock_logger());

        gateway.list_products(&first_page()).await.unwrap();
        let cached = gateway.list_products(&first_page()).await.unwrap();
        gateway.list_categories().await.unwrap();
        gateway.list_categories().await.unwrap();

        assert_eq!(cached, vec![product("p-1")]);
    }

    #[tokio::test]
    async fn should_refetch_lists_and_categories_after_create() {
        let mut inner = MockGateway::new();
        inner
            .expect_list_products()
            .times(2)
            .returning(|_| Ok(vec![product("p-1")]));
        inner
            .expect_list_categories()
            .times(2)
            .returning(|| Ok(vec![]));
        inner
            .expect_create_product()
            .times(1)
            .returning(|_| Ok(product("p-2")));

        let gateway = CachedCatalogGateway::new(Arc::new(inner), mock_logger());

        gateway.list_products(&first_page()).await.unwrap();
        gateway.list_categories().await.unwrap();
        gateway.create_product(&new_product()).await.unwrap();
        gateway.list_products(&first_page()).await.unwrap();
        gateway.list_categories().await.unwrap();
    }

    #[tokio::test]
    async fn should_keep_categories_but_drop_details_after_delete() {
        let mut inner = MockGateway::new();
        inner
            .expect_get_product()
            .times(2)
            .returning(|slug| Ok(product(slug)));
        inner
            .expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![]));
        inner.expect_delete_product().times(1).returning(|_| Ok(()));

        let gateway = CachedCatalogGateway::new(Arc::new(inner), mock_logger());

        gateway.get_product("p-1").await.unwrap();
        gateway.list_categories().await.unwrap();
        gateway.delete_product("p-1").await.unwrap();
        gateway.get_product("p-1").await.unwrap();
        gateway.list_categories().await.unwrap();
    }

    #[tokio::test]
    async fn should_not_cache_failures() {
        let mut inner = MockGateway::new();
        let mut calls = 0;
        inner.expect_search_products().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(GatewayError::Network)
            } else {
                Ok(vec![product("p-1")])
            }
        });

        let gateway = CachedCatalogGateway::new(Arc::new(inner), mock_logger());

        assert!(gateway.search_products("hat").await.is_err());
        assert_eq!(gateway.search_products("hat").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_cache_when_mutation_fails() {
        let mut inner = MockGateway::new();
        inner
            .expect_list_products()
            .times(1)
            .returning(|_| Ok(vec![product("p-1")]));
        inner
            .expect_delete_product()
            .returning(|_| Err(GatewayError::server(500)));

        let gateway = CachedCatalogGateway::new(Arc::new(inner), mock_logger());

        gateway.list_products(&first_page()).await.unwrap();
        assert!(gateway.delete_product("p-1").await.is_err());
        gateway.list_products(&first_page()).await.unwrap();
    }
}
