//! Carts service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("quantity must be at least one")]
    InvalidQuantity,

    #[error("storage error")]
    Store(#[from] StoreError),
}
