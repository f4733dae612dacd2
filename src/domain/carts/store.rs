//! Cart store boundary.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    domain::{carts::models::CartLine, catalog::models::ProductId, identity::UserId},
    store::StoreError,
};

/// Per-user cart collection, keyed by product id.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch every line in the user's cart.
    async fn read_cart(&self, user: &UserId) -> Result<FxHashMap<ProductId, CartLine>, StoreError>;

    /// Write one line, replacing any existing line for the same product.
    async fn upsert_line(&self, user: &UserId, line: CartLine) -> Result<(), StoreError>;

    /// Delete one line; succeeds even when the line is absent.
    async fn remove_line(&self, user: &UserId, product: &ProductId) -> Result<(), StoreError>;

    /// Delete every line in the user's cart.
    async fn clear_cart(&self, user: &UserId) -> Result<(), StoreError>;
}
