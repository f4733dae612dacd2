//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::models::ProductId;

/// One rentable selection in a user's cart.
///
/// The cart is keyed by product id: at most one line per (user, product),
/// and a repeated add replaces the prior line wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub qty: u32,
    /// Rental start instant.
    pub start_date: Timestamp,
    /// Rental end instant.
    pub end_date: Timestamp,
    pub added_at: Timestamp,
}

/// New Cart Line
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub qty: u32,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}
