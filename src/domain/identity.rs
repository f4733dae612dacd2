//! Identity

use crate::ids::TypedId;

/// Marker for the identity provider's subject.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// Opaque authenticated user identifier.
///
/// Supplied by the external identity provider; this crate attaches no
/// semantics beyond its use as a key scoping every per-user collection.
pub type UserId = TypedId<User>;
