//! Wishlists service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum WishlistsServiceError {
    #[error("storage error")]
    Store(#[from] StoreError),
}
