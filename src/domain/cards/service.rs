//! Cards service.

use std::{mem, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::{
    cards::{
        errors::CardsServiceError,
        models::{Card, CardId, NewCard},
        store::CardStore,
    },
    identity::UserId,
};

/// Cards service backed by the document store.
#[derive(Clone)]
pub struct DocCardsService {
    store: Arc<dyn CardStore>,
}

impl DocCardsService {
    #[must_use]
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CardsService for DocCardsService {
    async fn save_card(&self, user: &UserId, card: NewCard) -> Result<Card, CardsServiceError> {
        let mut card = card;

        // Move the secret material instead of cloning it; the drained
        // `NewCard` zeroizes what little remains on drop.
        let card = Card {
            id: CardId::generate(),
            card_number: mem::take(&mut card.card_number),
            expiry: mem::take(&mut card.expiry),
            cvc: mem::take(&mut card.cvc),
            created_at: Timestamp::now(),
        };

        self.store.save_card(user, card.clone()).await?;

        Ok(card)
    }

    async fn list_cards(&self, user: &UserId) -> Result<Vec<Card>, CardsServiceError> {
        Ok(self.store.list_cards(user).await?)
    }

    async fn delete_card(&self, user: &UserId, card: &CardId) -> Result<(), CardsServiceError> {
        Ok(self.store.delete_card(user, card).await?)
    }
}

#[automock]
#[async_trait]
pub trait CardsService: Send + Sync {
    /// Save a card, assigning its identifier and creation instant.
    async fn save_card(&self, user: &UserId, card: NewCard) -> Result<Card, CardsServiceError>;

    /// Retrieves the user's saved cards.
    async fn list_cards(&self, user: &UserId) -> Result<Vec<Card>, CardsServiceError>;

    /// Delete one saved card; a no-op when absent.
    async fn delete_card(&self, user: &UserId, card: &CardId) -> Result<(), CardsServiceError>;
}
