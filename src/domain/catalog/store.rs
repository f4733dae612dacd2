//! Catalog store boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::catalog::models::{Product, ProductId},
    store::StoreError,
};

/// Read-only catalog snapshot reader.
#[automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch one product snapshot, or `None` when the id is absent.
    async fn get_product(&self, product: &ProductId) -> Result<Option<Product>, StoreError>;

    /// Fetch every product in the catalog.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}
