//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::catalog::{
    errors::CatalogServiceError,
    filter::{CatalogFilter, filter_products},
    models::{Product, ProductId},
    store::CatalogStore,
};

/// Catalog service backed by the document store.
#[derive(Clone)]
pub struct DocCatalogService {
    store: Arc<dyn CatalogStore>,
}

impl DocCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for DocCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        Ok(self.store.list_products().await?)
    }

    async fn browse_products(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let products = self.store.list_products().await?;

        Ok(filter_products(products, filter))
    }

    async fn get_product(&self, product: &ProductId) -> Result<Product, CatalogServiceError> {
        self.store
            .get_product(product)
            .await?
            .ok_or(CatalogServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves the full catalog.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieves the catalog narrowed to a filter.
    async fn browse_products(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: &ProductId) -> Result<Product, CatalogServiceError>;
}
