//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{catalog::models::ProductId, identity::UserId},
    ids::TypedId,
};

/// Order ID
pub type OrderId = TypedId<Order>;

/// Fulfillment status of an order.
///
/// This crate only ever produces [`OrderStatus::Pending`]; the remaining
/// transitions belong to the fulfillment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    PickedUp,
    Returned,
    Cancelled,
}

/// A priced snapshot of one cart line at order time.
///
/// Title, image, and price are captured here so later catalog edits do not
/// retroactively change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub title: String,
    pub image: Option<String>,
    pub size: Option<String>,
    pub qty: u32,
    /// Price per day at order time, in minor units.
    pub price_per_day: u64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    /// Whole billed days, minimum one.
    pub days: u64,
    /// `days × price_per_day × qty`, in minor units.
    pub line_total: u64,
}

/// An immutable receipt for one checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderLineItem>,
    pub subtotal: u64,
    /// Refundable hold: 20% of the subtotal, rounded.
    pub deposit: u64,
    /// `subtotal + deposit`.
    pub total: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub notes: Option<String>,
}
