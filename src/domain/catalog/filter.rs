//! Catalog filtering.

use crate::domain::catalog::models::{Category, Product};

/// Client-side catalog filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub category: Option<Category>,

    /// Case-insensitive substring match on the product title.
    pub search: Option<String>,
}

/// Narrow a product list to the entries matching `filter`.
///
/// An empty filter passes everything through unchanged.
#[must_use]
pub fn filter_products(products: Vec<Product>, filter: &CatalogFilter) -> Vec<Product> {
    let needle = filter.search.as_ref().map(|s| s.to_lowercase());

    products
        .into_iter()
        .filter(|p| filter.category.is_none_or(|category| p.category == category))
        .filter(|p| {
            needle
                .as_ref()
                .is_none_or(|needle| p.title.to_lowercase().contains(needle))
        })
        .collect()
}
