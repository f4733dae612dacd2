//! Document store boundary.
//!
//! The concrete backend is an external collaborator; this crate sees it only
//! through the per-domain store traits (`domain::*::store`) and the shared
//! [`StoreError`]. [`MemoryStore`] is the in-process stand-in.

pub mod memory;

use thiserror::Error;

pub use memory::MemoryStore;

/// Errors surfaced by the document-store collaborator.
///
/// Failures bubble to the caller unmodified; nothing in this crate retries
/// or recovers partially.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable")]
    Unavailable,

    #[error("permission denied")]
    PermissionDenied,

    #[error("write conflict")]
    Conflict,

    #[error("backend error: {0}")]
    Backend(String),
}
