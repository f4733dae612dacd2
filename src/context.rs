//! App Context

use std::sync::Arc;

use crate::domain::{
    cards::{CardStore, CardsService, DocCardsService},
    carts::{CartStore, CartsService, DocCartsService},
    catalog::{CatalogService, CatalogStore, DocCatalogService},
    orders::{DocOrdersService, OrderStore, OrdersService},
    profiles::{DocProfilesService, ProfileStore, ProfilesService},
    wishlists::{DocWishlistsService, WishlistStore, WishlistsService},
};

/// The storefront's service bundle, one handle per domain.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub wishlists: Arc<dyn WishlistsService>,
    pub orders: Arc<dyn OrdersService>,
    pub cards: Arc<dyn CardsService>,
    pub profiles: Arc<dyn ProfilesService>,
}

impl AppContext {
    /// Build the application context over one store implementation.
    #[must_use]
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CatalogStore + CartStore + OrderStore + WishlistStore + CardStore + ProfileStore + 'static,
    {
        Self {
            catalog: Arc::new(DocCatalogService::new(store.clone())),
            carts: Arc::new(DocCartsService::new(store.clone())),
            wishlists: Arc::new(DocWishlistsService::new(store.clone())),
            orders: Arc::new(DocOrdersService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            cards: Arc::new(DocCardsService::new(store.clone())),
            profiles: Arc::new(DocProfilesService::new(store)),
        }
    }
}
