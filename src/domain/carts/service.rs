//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{CartLine, NewCartLine},
        store::CartStore,
    },
    catalog::models::ProductId,
    identity::UserId,
};

/// Carts service backed by the document store.
#[derive(Clone)]
pub struct DocCartsService {
    store: Arc<dyn CartStore>,
}

impl DocCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartsService for DocCartsService {
    async fn upsert_line(
        &self,
        user: &UserId,
        line: NewCartLine,
    ) -> Result<CartLine, CartsServiceError> {
        if line.qty == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let line = CartLine {
            product_id: line.product_id,
            size: line.size,
            qty: line.qty,
            start_date: line.start_date,
            end_date: line.end_date,
            added_at: Timestamp::now(),
        };

        self.store.upsert_line(user, line.clone()).await?;

        debug!(user = %user, product = %line.product_id, "upserted cart line");

        Ok(line)
    }

    async fn get_cart(
        &self,
        user: &UserId,
    ) -> Result<FxHashMap<ProductId, CartLine>, CartsServiceError> {
        Ok(self.store.read_cart(user).await?)
    }

    async fn remove_line(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<(), CartsServiceError> {
        Ok(self.store.remove_line(user, product).await?)
    }

    async fn clear_cart(&self, user: &UserId) -> Result<(), CartsServiceError> {
        Ok(self.store.clear_cart(user).await?)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add or replace the cart line for a product. Last write wins; there is
    /// no merging of quantities or dates with the prior line.
    async fn upsert_line(
        &self,
        user: &UserId,
        line: NewCartLine,
    ) -> Result<CartLine, CartsServiceError>;

    /// Retrieve the user's cart, keyed by product id.
    async fn get_cart(
        &self,
        user: &UserId,
    ) -> Result<FxHashMap<ProductId, CartLine>, CartsServiceError>;

    /// Remove one line; a no-op when the product is not in the cart.
    async fn remove_line(&self, user: &UserId, product: &ProductId)
    -> Result<(), CartsServiceError>;

    /// Remove every line from the user's cart.
    async fn clear_cart(&self, user: &UserId) -> Result<(), CartsServiceError>;
}
