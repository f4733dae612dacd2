//! End-to-end storefront flows over the in-memory document store.

use std::sync::Arc;

use jiff::Timestamp;
use testresult::TestResult;
use wardrobe::{
    context::AppContext,
    domain::{
        carts::{CartsService, models::NewCartLine},
        catalog::{
            CatalogFilter, CatalogService,
            models::{Category, Gender, Product, ProductId},
        },
        identity::UserId,
        orders::{
            OrderValidationError, OrdersService, OrdersServiceError, models::OrderStatus,
        },
        wishlists::WishlistsService,
    },
    store::MemoryStore,
};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn catalog_entry(id: &ProductId, title: &str, category: Category, price_per_day: u64) -> Product {
    Product {
        id: id.clone(),
        title: title.to_string(),
        description: Some(format!("{title} available to rent")),
        gender: Gender::Unisex,
        category,
        sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
        price_per_day,
        images: vec![format!("https://img.example/{id}.jpg")],
        stock: 5,
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn rental(product: &ProductId, qty: u32, start_ms: i64, end_ms: i64) -> TestResult<NewCartLine> {
    Ok(NewCartLine {
        product_id: product.clone(),
        size: Some("M".to_string()),
        qty,
        start_date: Timestamp::from_millisecond(start_ms)?,
        end_date: Timestamp::from_millisecond(end_ms)?,
    })
}

#[tokio::test]
async fn browse_wishlist_and_checkout_flow() -> TestResult {
    let store = Arc::new(MemoryStore::new());
    let app = AppContext::from_store(store.clone());
    let user = UserId::generate();

    let jacket = ProductId::generate();
    let dress = ProductId::generate();

    store
        .put_product(catalog_entry(&jacket, "Jacket", Category::Coat, 100))
        .await;
    store
        .put_product(catalog_entry(&dress, "Evening Dress", Category::Dress, 250))
        .await;

    // Browse the catalog down to coats.
    let coats = app
        .catalog
        .browse_products(&CatalogFilter {
            category: Some(Category::Coat),
            search: None,
        })
        .await?;

    assert_eq!(coats.len(), 1);
    assert_eq!(coats.first().map(|p| p.title.as_str()), Some("Jacket"));

    // Favorite the dress, then change our mind.
    assert!(app.wishlists.toggle_item(&user, &dress).await?);
    assert!(app.wishlists.contains(&user, &dress).await?);
    assert!(!app.wishlists.toggle_item(&user, &dress).await?);

    // Rent the jacket for one day, two units.
    app.carts
        .upsert_line(&user, rental(&jacket, 2, 0, DAY_MS)?)
        .await?;

    let order = app.orders.create_order_from_cart(&user).await?;

    assert_eq!(order.items.len(), 1);

    let item = order.items.first().expect("one line item");

    assert_eq!(item.days, 1);
    assert_eq!(item.line_total, 200);
    assert_eq!(item.title, "Jacket");
    assert_eq!(order.subtotal, 200);
    assert_eq!(order.deposit, 40);
    assert_eq!(order.total, 240);
    assert_eq!(order.status, OrderStatus::Pending);

    // The cart is gone; the order is on file.
    assert!(app.carts.get_cart(&user).await?.is_empty());
    assert_eq!(app.orders.list_orders(&user).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn repeated_add_replaces_line_before_checkout() -> TestResult {
    let store = Arc::new(MemoryStore::new());
    let app = AppContext::from_store(store.clone());
    let user = UserId::generate();

    let suit = ProductId::generate();

    store
        .put_product(catalog_entry(&suit, "Dinner Suit", Category::Suit, 400))
        .await;

    app.carts
        .upsert_line(&user, rental(&suit, 1, 0, DAY_MS)?)
        .await?;

    // Second add overwrites: three days, one unit.
    app.carts
        .upsert_line(&user, rental(&suit, 1, 0, 3 * DAY_MS)?)
        .await?;

    let cart = app.carts.get_cart(&user).await?;

    assert_eq!(cart.len(), 1, "the cart must hold one line per product");

    let order = app.orders.create_order_from_cart(&user).await?;
    let item = order.items.first().expect("one line item");

    assert_eq!(item.days, 3);
    assert_eq!(order.subtotal, 1200);
    assert_eq!(order.deposit, 240);
    assert_eq!(order.total, 1440);

    Ok(())
}

#[tokio::test]
async fn multi_line_checkout_with_stale_reference() -> TestResult {
    let store = Arc::new(MemoryStore::new());
    let app = AppContext::from_store(store.clone());
    let user = UserId::generate();

    let coat = ProductId::generate();
    let vanished = ProductId::generate();

    store
        .put_product(catalog_entry(&coat, "Wool Overcoat", Category::Coat, 1500))
        .await;

    app.carts
        .upsert_line(&user, rental(&coat, 1, 0, 2 * DAY_MS)?)
        .await?;
    app.carts
        .upsert_line(&user, rental(&vanished, 2, 0, DAY_MS)?)
        .await?;

    let order = app.orders.create_order_from_cart(&user).await?;

    assert_eq!(order.items.len(), 2);

    let degraded = order
        .items
        .iter()
        .find(|i| i.product_id == vanished)
        .expect("degraded line item");

    assert_eq!(degraded.title, "Product");
    assert_eq!(degraded.price_per_day, 0);
    assert_eq!(degraded.line_total, 0);

    assert_eq!(order.subtotal, 3000);
    assert_eq!(order.deposit, 600);
    assert_eq!(order.total, 3600);

    Ok(())
}

#[tokio::test]
async fn empty_cart_checkout_is_rejected() -> TestResult {
    let store = Arc::new(MemoryStore::new());
    let app = AppContext::from_store(store);
    let user = UserId::generate();

    let result = app.orders.create_order_from_cart(&user).await;

    assert!(
        matches!(
            result,
            Err(OrdersServiceError::Validation(
                OrderValidationError::EmptyCart
            ))
        ),
        "expected EmptyCart, got {result:?}"
    );

    assert!(app.orders.list_orders(&user).await?.is_empty());

    Ok(())
}
