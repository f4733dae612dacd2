//! Catalog Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Product ID
pub type ProductId = TypedId<Product>;

/// Audience a garment is cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

/// Garment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coat,
    Trouser,
    Waistcoat,
    Suit,
    Accessory,
    Dress,
}

/// Product Model
///
/// Read-only from this crate's point of view; catalog entries are created
/// and updated by an administrative path that lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub gender: Gender,
    pub category: Category,
    /// Available size labels, e.g. `"M"` or `"34"`.
    pub sizes: Vec<String>,
    /// Rental price per day, in minor units.
    pub price_per_day: u64,
    pub images: Vec<String>,
    /// Total units held; never decremented or checked here.
    pub stock: u32,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
