//! Rental route handlers.
//!
//! Rentals are informational: the page explains how renting works and lists
//! the units when the rental catalog is present. There is no cart or
//! checkout path for rentals - bookings happen over the phone.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use nautic_core::Rental;
use nautic_core::format_eur;

use crate::filters;
use crate::routes::vendita::PLACEHOLDER_IMAGE;
use crate::state::AppState;

/// Rental unit display data for templates.
#[derive(Clone)]
pub struct RentalView {
    pub name: String,
    pub description: String,
    pub price_per_day: String,
    pub image_url: String,
    pub available: bool,
}

impl From<&Rental> for RentalView {
    fn from(rental: &Rental) -> Self {
        let image_url = if rental.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            rental.image_url.clone()
        };

        Self {
            name: rental.name.clone(),
            description: rental.description.clone(),
            price_per_day: format_eur(rental.price_per_day),
            image_url,
            available: rental.available,
        }
    }
}

/// Rental page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/noleggio.html")]
pub struct NoleggioTemplate {
    pub rentals: Vec<RentalView>,
}

/// Display the rental page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let rentals = state
        .catalog()
        .rentals()
        .await
        .iter()
        .map(RentalView::from)
        .collect();

    NoleggioTemplate { rentals }
}
