//! Sale catalog route handlers (boats and watercraft).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use nautic_core::types::catalog::{self, CatalogItem, CategoryFilter};
use nautic_core::format_eur;

use crate::filters;
use crate::state::AppState;

/// Placeholder shown when a catalog item carries no image.
///
/// Images that 404 at render time fall back to the same file via
/// `static/js/image-fallback.js`.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
    pub in_stock: bool,
}

impl ProductView {
    /// Build the view for an item listed under `group`.
    #[must_use]
    pub fn from_item(item: &CatalogItem, group: &str) -> Self {
        let image_url = if item.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            item.image_url.clone()
        };

        Self {
            id: item.id.clone(),
            name: item.display_name(),
            description: item.description.clone(),
            category: item.display_category(group),
            price: format_eur(item.price),
            image_url,
            in_stock: item.in_stock,
        }
    }
}

/// One category filter chip.
#[derive(Clone)]
pub struct CategoryChip {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Build the filter chip row: "Tutti" plus every distinct display category.
///
/// `search` is carried through the chip links so switching category keeps
/// the current search term.
#[must_use]
pub fn category_chips(
    items: &[CatalogItem],
    group: &str,
    filter: &CategoryFilter,
    base_path: &str,
    search: &str,
) -> Vec<CategoryChip> {
    let href = |category: &str| {
        let mut href = format!("{base_path}?categoria={}", urlencoding::encode(category));
        if !search.is_empty() {
            href.push_str(&format!("&q={}", urlencoding::encode(search)));
        }
        href
    };

    let mut chips = vec![CategoryChip {
        label: "Tutti".to_string(),
        href: href(catalog::ALL_CATEGORIES),
        selected: filter.is_all(),
    }];

    for category in catalog::distinct_categories(items, group) {
        chips.push(CategoryChip {
            selected: filter.matches(&category),
            href: href(&category),
            label: category,
        });
    }

    chips
}

/// Sale page query parameters.
#[derive(Debug, Deserialize)]
pub struct VenditaQuery {
    #[serde(default)]
    pub categoria: String,
}

/// Sale catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/vendita.html")]
pub struct VenditaTemplate {
    pub chips: Vec<CategoryChip>,
    pub products: Vec<ProductView>,
}

/// Sale items carry their raw category labels (no structural prefix).
const GROUP: &str = "";

/// Display the sale catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<VenditaQuery>,
) -> impl IntoResponse {
    let items = state.catalog().sale_products().await;
    let filter = CategoryFilter::from_query(&query.categoria);

    let chips = category_chips(&items, GROUP, &filter, "/vendita", "");
    let products = catalog::filter_items(&items, GROUP, &filter, "")
        .into_iter()
        .map(|item| ProductView::from_item(item, GROUP))
        .collect();

    VenditaTemplate { chips, products }
}
