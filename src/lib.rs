//! Wardrobe
//!
//! Domain core and data-access glue for a clothing-rental storefront:
//! catalog browsing, per-user wishlist and cart membership, rental order
//! derivation with a 20% deposit, saved payment cards, and user profiles.
//! Persistence is a remote document store reached through per-domain async
//! store traits; an in-memory implementation backs tests and local tooling.

pub mod context;
pub mod domain;
pub mod ids;
pub mod store;

#[cfg(test)]
mod test;
