//! The session cart store.
//!
//! The cart is an owned value with mutation methods as its only write
//! surface; derived reads are recomputed on every call so they can never go
//! stale against the line collection. It lives in the in-memory session
//! store and is never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogItem, ShopifyId};

/// One catalog item held in the cart, with its quantity.
///
/// Copies the catalog fields at add time so a cache refresh cannot change a
/// line under the shopper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub shopify_product_id: Option<ShopifyId>,
    pub handle: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal (price × quantity).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whether this line can be handed off to the hosted commerce widget.
    #[must_use]
    pub fn has_shopify_id(&self) -> bool {
        self.shopify_product_id.is_some() || self.handle.is_some()
    }
}

impl From<&CatalogItem> for CartLine {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.display_name(),
            description: item.description.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            shopify_product_id: item.shopify_product_id.clone(),
            handle: item.handle.clone(),
            quantity: 1,
        }
    }
}

/// An ordered collection of cart lines.
///
/// Invariant: every line has quantity ≥ 1. A quantity reduced to 0 removes
/// the line; a line is never retained at 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging on catalog id.
    ///
    /// A line with the same id has its quantity incremented by 1; otherwise
    /// the line is appended with quantity 1. Merging is strictly by id
    /// equality: the same physical product exported under two catalog ids
    /// stays as two lines.
    pub fn add_item(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine { quantity: 1, ..line });
        }
    }

    /// Remove the line with this id; no-op when absent.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Set a line's quantity, clamped at 0; 0 removes the line.
    ///
    /// No upper bound is enforced. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let quantity = quantity.max(0);
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of items (sum of quantities). Recomputed on every call.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Cart total (sum of price × quantity). Recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: format!("Articolo {id}"),
            description: String::new(),
            price: Decimal::from(price),
            image_url: String::new(),
            shopify_product_id: None,
            handle: None,
            quantity: 1,
        }
    }

    #[test]
    fn repeated_adds_accumulate_quantity() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add_item(line("a", 10));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(line("b", 10));
        cart.add_item(line("a", 20));
        cart.add_item(line("b", 10));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 100));
        cart.update_quantity("a", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn negative_quantity_clamps_to_removal() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 100));
        cart.update_quantity("a", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_value_without_upper_bound() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 5));
        cart.update_quantity("a", 250);
        assert_eq!(cart.lines()[0].quantity, 250);
        assert_eq!(cart.total(), Decimal::from(1250));
    }

    #[test]
    fn update_and_remove_unknown_ids_are_no_ops() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 10));
        cart.remove_item("missing");
        cart.update_quantity("missing", 7);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn totals_track_every_mutation() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 100));
        cart.add_item(line("a", 100));
        cart.add_item(line("b", 50));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Decimal::from(250));

        cart.remove_item("b");
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Decimal::from(200));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn survives_session_round_trip() {
        let mut cart = Cart::new();
        cart.add_item(line("a", 100));
        cart.update_quantity("a", 2);

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.item_count(), 2);
        assert_eq!(restored.total(), Decimal::from(200));
    }
}
