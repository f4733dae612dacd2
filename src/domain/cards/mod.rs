//! Cards

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::CardsServiceError;
pub use service::*;
pub use store::CardStore;
