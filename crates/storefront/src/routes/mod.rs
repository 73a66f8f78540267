//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /chi-siamo              - About page (markdown content)
//! GET  /pagamenti              - Payment info page (hosted widget embed)
//!
//! # Catalog
//! GET  /vendita                - Boats and watercraft for sale
//! GET  /noleggio               - Rental info and units
//! GET  /ricambi                - Spare parts (search + category filter)
//! GET  /accessori              - Accessories
//! GET  /news                   - News index
//! GET  /news/{id}              - News article
//!
//! # Cart (HTMX fragments)
//! GET  /carrello               - Cart page
//! POST /carrello/add           - Add item (returns count badge fragment)
//! POST /carrello/update        - Update quantity (returns cart items fragment)
//! POST /carrello/remove        - Remove item (returns cart items fragment)
//! POST /carrello/clear         - Empty the cart (returns cart items fragment)
//! GET  /carrello/count         - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Redirect into the hosted store
//! ```

pub mod accessori;
pub mod cart;
pub mod home;
pub mod news;
pub mod noleggio;
pub mod pages;
pub mod ricambi;
pub mod vendita;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the news routes router.
pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(news::index))
        .route("/{id}", get(news::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home and content pages
        .route("/", get(home::home))
        .route("/chi-siamo", get(pages::chi_siamo))
        .route("/pagamenti", get(pages::pagamenti))
        // Catalog pages
        .route("/vendita", get(vendita::index))
        .route("/noleggio", get(noleggio::index))
        .route("/ricambi", get(ricambi::index))
        .route("/accessori", get(accessori::index))
        .nest("/news", news_routes())
        // Cart
        .nest("/carrello", cart_routes())
        // Checkout handoff
        .route("/checkout", get(cart::checkout))
}
