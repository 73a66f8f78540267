//! Core types for Nautic Service.
//!
//! Catalog items and the pure filtering logic, the session cart store,
//! news articles, and EUR price formatting.

pub mod cart;
pub mod catalog;
pub mod news;
pub mod price;

pub use cart::{Cart, CartLine};
pub use catalog::{CatalogItem, CategoryFilter, Rental, ShopifyId};
pub use news::NewsArticle;
pub use price::format_eur;
