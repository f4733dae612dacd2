//! Profiles

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::ProfilesServiceError;
pub use service::*;
pub use store::ProfileStore;
