//! Orders service errors.

use thiserror::Error;

use crate::{domain::catalog::models::ProductId, store::StoreError};

/// Rejections raised before any write is attempted.
#[derive(Debug, Error)]
pub enum OrderValidationError {
    /// No order can be derived from an empty cart.
    #[error("cannot create an order from an empty cart")]
    EmptyCart,

    /// A cart line carried a zero quantity.
    #[error("quantity must be at least one for product {0}")]
    InvalidQuantity(ProductId),
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
