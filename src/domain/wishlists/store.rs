//! Wishlist store boundary.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashSet;

use crate::{
    domain::{catalog::models::ProductId, identity::UserId},
    store::StoreError,
};

/// Per-user set of favorited product ids.
///
/// Each entry carries only its creation instant; re-adding a present id
/// overwrites that instant rather than duplicating the entry.
#[automock]
#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// Fetch the set of favorited product ids.
    async fn read_wishlist(&self, user: &UserId) -> Result<FxHashSet<ProductId>, StoreError>;

    /// Insert one entry; idempotent in effect.
    async fn add_item(
        &self,
        user: &UserId,
        product: &ProductId,
        created_at: Timestamp,
    ) -> Result<(), StoreError>;

    /// Delete one entry; succeeds even when the entry is absent.
    async fn remove_item(&self, user: &UserId, product: &ProductId) -> Result<(), StoreError>;

    /// Delete every entry for the user.
    async fn clear_wishlist(&self, user: &UserId) -> Result<(), StoreError>;
}
