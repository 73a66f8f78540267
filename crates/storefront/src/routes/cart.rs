//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session (in-memory store); handlers load
//! it, mutate it through the core cart methods, and save it back. Checkout
//! hands the cart off to the hosted store - see [`crate::shopify`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use nautic_core::{Cart, CartLine, format_eur};

use crate::error::AppError;
use crate::filters;
use crate::routes::vendita::PLACEHOLDER_IMAGE;
use crate::state::AppState;

/// Session key holding the serialized cart.
const CART_SESSION_KEY: &str = "nautic.cart";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image_url: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_eur(rust_decimal::Decimal::ZERO),
            item_count: 0,
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_eur(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let image_url = if line.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            line.image_url.clone()
        };

        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            description: line.description.clone(),
            quantity: line.quantity,
            price: format_eur(line.price),
            line_price: format_eur(line.subtotal()),
            image_url,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to empty.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(CART_SESSION_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Save the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(CART_SESSION_KEY, cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page query parameters.
#[derive(Debug, Deserialize)]
pub struct CartPageQuery {
    #[serde(default)]
    pub errore: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    /// Set when checkout was refused because no line can cross to the
    /// hosted store.
    pub checkout_error: bool,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session, Query(query): Query<CartPageQuery>) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
        checkout_error: query.errore == "checkout",
    }
}

/// Add an item to the cart (HTMX).
///
/// Looks the item up in the catalog by id; repeated adds of the same id
/// bump its quantity. Returns the count badge fragment with an HTMX
/// trigger so other cart widgets refresh.
///
/// # Errors
///
/// Returns 404 if the id is in nobody's catalog.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let item = state
        .catalog()
        .find_product(&form.product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("prodotto {}", form.product_id)))?;

    let mut cart = load_cart(&session).await;
    cart.add_item(CartLine::from(&item));
    save_cart(&session, &cart).await;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Update a cart line's quantity (HTMX).
///
/// Quantity 0 (or less) removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.update_quantity(&form.product_id, form.quantity);
    save_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Remove an item from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove_item(&form.product_id);
    save_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Empty the cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Response {
    let mut cart = load_cart(&session).await;
    cart.clear();
    save_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response()
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartCountTemplate {
        count: cart.item_count(),
    }
}

/// Hand the cart off to the hosted store.
///
/// Only lines with a Shopify identifier can cross the boundary. When no
/// line qualifies the shopper goes back to the cart page with a visible
/// warning and the cart untouched; an empty cart just goes back to the
/// cart page.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Response {
    let cart = load_cart(&session).await;

    if cart.is_empty() {
        return Redirect::to("/carrello").into_response();
    }

    match state.buy_button().checkout_url(&cart) {
        Some(url) => Redirect::to(url.as_str()).into_response(),
        None => {
            tracing::warn!("checkout refused: no cart line carries a Shopify identifier");
            Redirect::to("/carrello?errore=checkout").into_response()
        }
    }
}
