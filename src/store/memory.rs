//! In-memory document store.

use async_trait::async_trait;
use jiff::Timestamp;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::RwLock;

use crate::{
    domain::{
        cards::{
            models::{Card, CardId},
            store::CardStore,
        },
        carts::{models::CartLine, store::CartStore},
        catalog::{
            models::{Product, ProductId},
            store::CatalogStore,
        },
        identity::UserId,
        orders::{models::Order, store::OrderStore},
        profiles::{models::UserProfile, store::ProfileStore},
        wishlists::store::WishlistStore,
    },
    store::StoreError,
};

/// In-memory document store implementing every persistence contract.
///
/// Stands in for the remote document database in tests and local tooling.
/// Writes are last-write-wins per key, like the remote store's merge-free
/// document sets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: RwLock<FxHashMap<ProductId, Product>>,
    carts: RwLock<FxHashMap<UserId, FxHashMap<ProductId, CartLine>>>,
    orders: RwLock<FxHashMap<UserId, Vec<Order>>>,
    wishlists: RwLock<FxHashMap<UserId, FxHashMap<ProductId, Timestamp>>>,
    cards: RwLock<FxHashMap<UserId, Vec<Card>>>,
    profiles: RwLock<FxHashMap<UserId, UserProfile>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a catalog entry.
    ///
    /// Catalog writes belong to the administrative path, which lives outside
    /// this crate; tests and demos seed through here.
    pub async fn put_product(&self, product: Product) {
        self.catalog
            .write()
            .await
            .insert(product.id.clone(), product);
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get_product(&self, product: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.catalog.read().await.get(product).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.catalog.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn read_cart(&self, user: &UserId) -> Result<FxHashMap<ProductId, CartLine>, StoreError> {
        Ok(self
            .carts
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert_line(&self, user: &UserId, line: CartLine) -> Result<(), StoreError> {
        self.carts
            .write()
            .await
            .entry(user.clone())
            .or_default()
            .insert(line.product_id.clone(), line);

        Ok(())
    }

    async fn remove_line(&self, user: &UserId, product: &ProductId) -> Result<(), StoreError> {
        if let Some(cart) = self.carts.write().await.get_mut(user) {
            cart.remove(product);
        }

        Ok(())
    }

    async fn clear_cart(&self, user: &UserId) -> Result<(), StoreError> {
        self.carts.write().await.remove(user);

        Ok(())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn create_order(&self, order: &Order) -> Result<(), StoreError> {
        self.orders
            .write()
            .await
            .entry(order.user_id.clone())
            .or_default()
            .push(order.clone());

        Ok(())
    }

    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn read_wishlist(&self, user: &UserId) -> Result<FxHashSet<ProductId>, StoreError> {
        Ok(self
            .wishlists
            .read()
            .await
            .get(user)
            .map(|items| items.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn add_item(
        &self,
        user: &UserId,
        product: &ProductId,
        created_at: Timestamp,
    ) -> Result<(), StoreError> {
        self.wishlists
            .write()
            .await
            .entry(user.clone())
            .or_default()
            .insert(product.clone(), created_at);

        Ok(())
    }

    async fn remove_item(&self, user: &UserId, product: &ProductId) -> Result<(), StoreError> {
        if let Some(items) = self.wishlists.write().await.get_mut(user) {
            items.remove(product);
        }

        Ok(())
    }

    async fn clear_wishlist(&self, user: &UserId) -> Result<(), StoreError> {
        self.wishlists.write().await.remove(user);

        Ok(())
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn save_card(&self, user: &UserId, card: Card) -> Result<(), StoreError> {
        self.cards
            .write()
            .await
            .entry(user.clone())
            .or_default()
            .push(card);

        Ok(())
    }

    async fn list_cards(&self, user: &UserId) -> Result<Vec<Card>, StoreError> {
        Ok(self
            .cards
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_card(&self, user: &UserId, card: &CardId) -> Result<(), StoreError> {
        if let Some(cards) = self.cards.write().await.get_mut(user) {
            cards.retain(|c| c.id != *card);
        }

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user: &UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(user).cloned())
    }

    async fn put_profile(&self, user: &UserId, profile: UserProfile) -> Result<(), StoreError> {
        self.profiles.write().await.insert(user.clone(), profile);

        Ok(())
    }
}
