//! Card Models

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::ids::TypedId;

/// Card ID
pub type CardId = TypedId<Card>;

/// Stored payment-method record.
///
/// The number and CVC are persisted verbatim; in memory they are wiped on
/// drop and redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_number: String,
    /// Expiry as entered, e.g. `"09/27"`.
    pub expiry: String,
    pub cvc: String,
    pub created_at: Timestamp,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("card_number", &"**redacted**")
            .field("expiry", &self.expiry)
            .field("cvc", &"**redacted**")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Drop for Card {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.cvc.zeroize();
    }
}

/// New Card Data
#[derive(Clone)]
pub struct NewCard {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl fmt::Debug for NewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCard")
            .field("card_number", &"**redacted**")
            .field("expiry", &self.expiry)
            .field("cvc", &"**redacted**")
            .finish()
    }
}

impl Drop for NewCard {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.cvc.zeroize();
    }
}
