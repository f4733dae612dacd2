//! Wishlists

pub mod errors;
pub mod service;
pub mod store;

pub use errors::WishlistsServiceError;
pub use service::*;
pub use store::WishlistStore;
