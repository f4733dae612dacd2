//! Cards service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CardsServiceError {
    #[error("storage error")]
    Store(#[from] StoreError),
}
