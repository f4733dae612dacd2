//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    carts::models::{CartLine, NewCartLine},
    catalog::models::{Category, Gender, Product, ProductId},
};

pub(crate) fn product(id: &ProductId, title: &str, price_per_day: u64) -> Product {
    Product {
        id: id.clone(),
        title: title.to_string(),
        description: None,
        gender: Gender::Unisex,
        category: Category::Suit,
        sizes: vec!["M".to_string(), "L".to_string()],
        price_per_day,
        images: vec![format!("https://img.example/{id}.jpg")],
        stock: 3,
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn line(product: &ProductId, qty: u32, start_ms: i64, end_ms: i64) -> NewCartLine {
    NewCartLine {
        product_id: product.clone(),
        size: Some("M".to_string()),
        qty,
        start_date: Timestamp::from_millisecond(start_ms).expect("valid start instant"),
        end_date: Timestamp::from_millisecond(end_ms).expect("valid end instant"),
    }
}

pub(crate) fn cart_line(product: &ProductId, qty: u32, start_ms: i64, end_ms: i64) -> CartLine {
    let new = line(product, qty, start_ms, end_ms);

    CartLine {
        product_id: new.product_id,
        size: new.size,
        qty: new.qty,
        start_date: new.start_date,
        end_date: new.end_date,
        added_at: Timestamp::UNIX_EPOCH,
    }
}
