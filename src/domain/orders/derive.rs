//! Order derivation.

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::domain::{
    carts::models::CartLine,
    catalog::models::{Product, ProductId},
    identity::UserId,
    orders::{
        errors::OrderValidationError,
        models::{Order, OrderId, OrderLineItem, OrderStatus},
        pricing::{deposit_on, line_total, rental_days},
    },
};

/// Fallback title for a cart line whose product has left the catalog.
const MISSING_PRODUCT_TITLE: &str = "Product";

/// Derive a priced order from a cart and a catalog snapshot.
///
/// A cart line whose product id is absent from `products` is still billed,
/// against a zero price and a placeholder title: checkout must not be
/// blocked by a deleted catalog entry. Items are ordered by the instant
/// they were added to the cart, with ties broken by product id, so the
/// derivation is deterministic.
///
/// The caller supplies `order_id`; retried checkouts can reuse one id as an
/// idempotency key.
///
/// # Errors
///
/// - [`OrderValidationError::EmptyCart`]: `cart` holds no lines.
/// - [`OrderValidationError::InvalidQuantity`]: a line carries a zero
///   quantity.
pub fn derive_order(
    user: &UserId,
    cart: &FxHashMap<ProductId, CartLine>,
    products: &FxHashMap<ProductId, Product>,
    order_id: OrderId,
    created_at: Timestamp,
) -> Result<Order, OrderValidationError> {
    if cart.is_empty() {
        return Err(OrderValidationError::EmptyCart);
    }

    let mut lines: Vec<&CartLine> = cart.values().collect();

    lines.sort_by(|a, b| {
        a.added_at
            .cmp(&b.added_at)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });

    let mut items = Vec::with_capacity(lines.len());

    for line in lines {
        if line.qty == 0 {
            return Err(OrderValidationError::InvalidQuantity(
                line.product_id.clone(),
            ));
        }

        items.push(price_line(line, products.get(&line.product_id)));
    }

    let subtotal = items
        .iter()
        .fold(0_u64, |acc, item| acc.saturating_add(item.line_total));
    let deposit = deposit_on(subtotal);
    let total = subtotal.saturating_add(deposit);

    Ok(Order {
        id: order_id,
        user_id: user.clone(),
        items,
        subtotal,
        deposit,
        total,
        status: OrderStatus::Pending,
        created_at,
        notes: None,
    })
}

/// Price one cart line against its product snapshot, if one survives.
fn price_line(line: &CartLine, product: Option<&Product>) -> OrderLineItem {
    let days = rental_days(line.start_date, line.end_date);
    let price_per_day = product.map_or(0, |p| p.price_per_day);

    OrderLineItem {
        product_id: line.product_id.clone(),
        title: product.map_or_else(|| MISSING_PRODUCT_TITLE.to_string(), |p| p.title.clone()),
        image: product.and_then(|p| p.images.first().cloned()),
        size: line.size.clone(),
        qty: line.qty,
        price_per_day,
        start_date: line.start_date,
        end_date: line.end_date,
        days,
        line_total: line_total(days, price_per_day, line.qty),
    }
}
