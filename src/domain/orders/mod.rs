//! Orders

pub mod derive;
pub mod errors;
pub mod models;
pub mod pricing;
pub mod service;
pub mod store;

pub use errors::{OrderValidationError, OrdersServiceError};
pub use service::*;
pub use store::OrderStore;
