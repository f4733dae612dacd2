//! Card store boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::{
        cards::models::{Card, CardId},
        identity::UserId,
    },
    store::StoreError,
};

/// Per-user saved payment cards.
#[automock]
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Persist one card under the user.
    async fn save_card(&self, user: &UserId, card: Card) -> Result<(), StoreError>;

    /// Fetch every card the user has saved.
    async fn list_cards(&self, user: &UserId) -> Result<Vec<Card>, StoreError>;

    /// Delete one card; succeeds even when the card is absent.
    async fn delete_card(&self, user: &UserId, card: &CardId) -> Result<(), StoreError>;
}
