//! Catalog item types and the category/search filtering logic.
//!
//! Catalog collections are plain JSON arrays maintained by hand. Category
//! labels may carry a structural group prefix (`"Ricambi - Motore"`); the
//! user-facing label is the part after the prefix, and a bare group label
//! folds to [`FALLBACK_CATEGORY`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fallback label for items whose category is empty or is the bare group label.
pub const FALLBACK_CATEGORY: &str = "Altri";

/// Query-string sentinel selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Shopify product identifier as it appears in the catalog JSON.
///
/// The exports are inconsistent: some rows carry the numeric variant id,
/// others a string id. Both shapes must deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShopifyId {
    Numeric(i64),
    Text(String),
}

impl std::fmt::Display for ShopifyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A product or spare part loaded from a catalog JSON file.
///
/// Immutable once parsed; a collection is replaced wholesale when the
/// catalog cache refreshes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub shopify_product_id: Option<ShopifyId>,
    #[serde(default)]
    pub handle: Option<String>,
}

impl CatalogItem {
    /// User-facing name with supplier code noise removed.
    ///
    /// Runs of 6 or more digits are supplier codes, not part of the name;
    /// they are stripped and the remaining whitespace collapsed. Falls back
    /// to the raw name when stripping would leave nothing.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut cleaned = String::with_capacity(self.name.len());
        let mut digits = String::new();
        for ch in self.name.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else {
                if !digits.is_empty() && digits.len() < 6 {
                    cleaned.push_str(&digits);
                }
                digits.clear();
                cleaned.push(ch);
            }
        }
        if !digits.is_empty() && digits.len() < 6 {
            cleaned.push_str(&digits);
        }

        let collapsed: String = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            self.name.trim().to_string()
        } else {
            collapsed
        }
    }

    /// User-facing category label for a collection grouped under `group`.
    #[must_use]
    pub fn display_category(&self, group: &str) -> String {
        display_category(&self.category, group)
    }

    /// Whether this item can be handed off to the hosted commerce widget.
    #[must_use]
    pub fn has_shopify_id(&self) -> bool {
        self.shopify_product_id.is_some() || self.handle.is_some()
    }
}

/// A rental unit loaded from the rental catalog.
///
/// Rentals are informational only; they have no buy path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_per_day: Decimal,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub available: bool,
}

/// Normalize a raw category label for display.
///
/// `"{group} - Sub"` folds to `"Sub"`, a bare `group` (or an empty label)
/// folds to [`FALLBACK_CATEGORY`], anything else passes through unchanged.
#[must_use]
pub fn display_category(raw: &str, group: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == group {
        return FALLBACK_CATEGORY.to_string();
    }
    if !group.is_empty() {
        let prefix = format!("{group} - ");
        if let Some(rest) = raw.strip_prefix(&prefix) {
            return rest.to_string();
        }
    }
    raw.to_string()
}

/// Category selection for a catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category matches.
    All,
    /// Exact match against the normalized display category.
    Category(String),
}

impl CategoryFilter {
    /// Parse the `categoria` query parameter.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    /// Whether a normalized display category satisfies this filter.
    #[must_use]
    pub fn matches(&self, display_category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == display_category,
        }
    }

    /// Whether this filter is the all-categories sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Filter a collection by category and free-text search, preserving order.
///
/// The category predicate matches the normalized display category exactly;
/// the search predicate is a case-insensitive substring match against name,
/// description, or normalized category. An empty search term matches
/// everything. This is a filter, not a ranking: no pagination, no scoring.
#[must_use]
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    group: &str,
    filter: &CategoryFilter,
    search: &str,
) -> Vec<&'a CatalogItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let category = item.display_category(group);
            if !filter.matches(&category) {
                return false;
            }
            if needle.is_empty() {
                return true;
            }
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Unique display categories in first-seen order, for the filter chips.
#[must_use]
pub fn distinct_categories(items: &[CatalogItem], group: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        let category = item.display_category(group);
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
