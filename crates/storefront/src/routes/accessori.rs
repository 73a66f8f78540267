//! Accessories route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::vendita::ProductView;
use crate::state::AppState;

/// Accessory categories occasionally carry an "Accessori - " prefix.
const GROUP: &str = "Accessori";

/// Accessories page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/accessori.html")]
pub struct AccessoriTemplate {
    pub products: Vec<ProductView>,
}

/// Display the accessories grid.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = state
        .catalog()
        .accessories()
        .await
        .iter()
        .map(|item| ProductView::from_item(item, GROUP))
        .collect();

    AccessoriTemplate { products }
}
