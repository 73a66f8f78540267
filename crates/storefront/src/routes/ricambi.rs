//! Spare parts route handlers.
//!
//! The only catalog page with free-text search: parts lists run long and
//! shoppers arrive knowing the part they need.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use nautic_core::types::catalog::{self, CategoryFilter};

use crate::filters;
use crate::routes::vendita::{CategoryChip, ProductView, category_chips};
use crate::state::AppState;

/// Spare part categories are prefixed with this group label in the catalog.
const GROUP: &str = "Ricambi";

/// Spare parts page query parameters.
#[derive(Debug, Deserialize)]
pub struct RicambiQuery {
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub q: String,
}

/// Spare parts page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/ricambi.html")]
pub struct RicambiTemplate {
    pub chips: Vec<CategoryChip>,
    pub products: Vec<ProductView>,
    pub search: String,
    pub result_count: usize,
}

/// Display the spare parts catalog.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<RicambiQuery>,
) -> impl IntoResponse {
    let items = state.catalog().spare_parts().await;
    let filter = CategoryFilter::from_query(&query.categoria);
    let search = query.q.trim().to_string();

    let chips = category_chips(&items, GROUP, &filter, "/ricambi", &search);
    let products: Vec<ProductView> = catalog::filter_items(&items, GROUP, &filter, &search)
        .into_iter()
        .map(|item| ProductView::from_item(item, GROUP))
        .collect();
    let result_count = products.len();

    RicambiTemplate {
        chips,
        products,
        search,
        result_count,
    }
}
