//! Wishlists service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::domain::{
    catalog::models::ProductId,
    identity::UserId,
    wishlists::{errors::WishlistsServiceError, store::WishlistStore},
};

/// Wishlists service backed by the document store.
#[derive(Clone)]
pub struct DocWishlistsService {
    store: Arc<dyn WishlistStore>,
}

impl DocWishlistsService {
    #[must_use]
    pub fn new(store: Arc<dyn WishlistStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WishlistsService for DocWishlistsService {
    async fn add_item(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<(), WishlistsServiceError> {
        Ok(self
            .store
            .add_item(user, product, Timestamp::now())
            .await?)
    }

    async fn remove_item(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<(), WishlistsServiceError> {
        Ok(self.store.remove_item(user, product).await?)
    }

    async fn contains(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<bool, WishlistsServiceError> {
        Ok(self.store.read_wishlist(user).await?.contains(product))
    }

    async fn list_items(&self, user: &UserId) -> Result<FxHashSet<ProductId>, WishlistsServiceError> {
        Ok(self.store.read_wishlist(user).await?)
    }

    async fn toggle_item(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<bool, WishlistsServiceError> {
        // Read-then-branch, not an atomic primitive: two concurrent toggles
        // on the same key race on remote arrival order.
        if self.contains(user, product).await? {
            self.store.remove_item(user, product).await?;

            Ok(false)
        } else {
            self.store
                .add_item(user, product, Timestamp::now())
                .await?;

            Ok(true)
        }
    }

    async fn clear_wishlist(&self, user: &UserId) -> Result<(), WishlistsServiceError> {
        Ok(self.store.clear_wishlist(user).await?)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Favorite a product; adding an already-present id is a no-op in
    /// effect.
    async fn add_item(&self, user: &UserId, product: &ProductId)
    -> Result<(), WishlistsServiceError>;

    /// Unfavorite a product; a no-op when absent.
    async fn remove_item(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<(), WishlistsServiceError>;

    /// Whether the product is currently favorited.
    async fn contains(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<bool, WishlistsServiceError>;

    /// The set of favorited product ids; order is irrelevant.
    async fn list_items(&self, user: &UserId)
    -> Result<FxHashSet<ProductId>, WishlistsServiceError>;

    /// Flip membership and return the new state (`true` when now present).
    async fn toggle_item(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<bool, WishlistsServiceError>;

    /// Remove every favorited product.
    async fn clear_wishlist(&self, user: &UserId) -> Result<(), WishlistsServiceError>;
}
