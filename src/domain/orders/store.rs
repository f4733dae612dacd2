//! Order store boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{identity::UserId, orders::models::Order},
    store::StoreError,
};

/// Per-user order history.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist one order under its owning user.
    async fn create_order(&self, order: &Order) -> Result<(), StoreError>;

    /// Fetch every order the user has placed.
    async fn list_orders(&self, user: &UserId) -> Result<Vec<Order>, StoreError>;
}
