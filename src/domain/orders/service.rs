//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{Span, info};

use crate::{
    domain::{
        carts::{models::CartLine, store::CartStore},
        catalog::{
            models::{Product, ProductId},
            store::CatalogStore,
        },
        identity::UserId,
        orders::{
            derive::derive_order,
            errors::{OrderValidationError, OrdersServiceError},
            models::{Order, OrderId},
            store::OrderStore,
        },
    },
    store::StoreError,
};

/// Orders service backed by the document store.
#[derive(Clone)]
pub struct DocOrdersService {
    catalog: Arc<dyn CatalogStore>,
    carts: Arc<dyn CartStore>,
    orders: Arc<dyn OrderStore>,
}

impl DocOrdersService {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        carts: Arc<dyn CartStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            catalog,
            carts,
            orders,
        }
    }

    /// Fetch the snapshot of every product the cart references.
    ///
    /// Lines are independent, so the fetches are issued together; all of
    /// them complete before any totals are computed. Absent products are
    /// simply left out of the snapshot.
    async fn resolve_products(
        &self,
        cart: &FxHashMap<ProductId, CartLine>,
    ) -> Result<FxHashMap<ProductId, Product>, StoreError> {
        let fetches = cart.keys().map(|product_id| async move {
            let snapshot = self.catalog.get_product(product_id).await?;

            Ok::<_, StoreError>((product_id.clone(), snapshot))
        });

        Ok(try_join_all(fetches)
            .await?
            .into_iter()
            .filter_map(|(id, snapshot)| snapshot.map(|product| (id, product)))
            .collect())
    }
}

#[async_trait]
impl OrdersService for DocOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order_from_cart",
        skip(self),
        fields(
            user = %user,
            order_id = tracing::field::Empty,
            line_count = tracing::field::Empty,
            total = tracing::field::Empty
        ),
        err
    )]
    async fn create_order_from_cart(&self, user: &UserId) -> Result<Order, OrdersServiceError> {
        let cart = self.carts.read_cart(user).await?;

        if cart.is_empty() {
            return Err(OrderValidationError::EmptyCart.into());
        }

        let products = self.resolve_products(&cart).await?;

        let order = derive_order(user, &cart, &products, OrderId::generate(), Timestamp::now())?;

        let span = Span::current();

        span.record("order_id", tracing::field::display(&order.id));
        span.record("line_count", tracing::field::display(order.items.len()));
        span.record("total", tracing::field::display(order.total));

        // Two sequential writes with no compensating transaction: a failure
        // after the order lands but before the clear leaves the cart
        // populated, and a naive caller retry duplicates the order.
        self.orders.create_order(&order).await?;
        self.carts.clear_cart(user).await?;

        info!(order_id = %order.id, "created order");

        Ok(order)
    }

    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.orders.list_orders(user).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Derive, persist, and return an order priced from the user's current
    /// cart, clearing the cart on success.
    async fn create_order_from_cart(&self, user: &UserId) -> Result<Order, OrdersServiceError>;

    /// Retrieves the user's order history.
    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError>;
}
