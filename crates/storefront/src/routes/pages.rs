//! Static content page route handlers.
//!
//! Serves the markdown-based pages (chi siamo) and the payment page, which
//! embeds the hosted Buy Button cart widget.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::CspNonce;
use crate::shopify;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub title: String,
    pub description: String,
    /// Pre-formatted update date; empty when the page carries none.
    pub updated_at: String,
    pub content_html: String,
}

/// Payment page template: hosted cart widget embed.
#[derive(Template, WebTemplate)]
#[template(path = "pages/pagamenti.html")]
pub struct PaymentPageTemplate {
    /// Hosted store domain, passed verbatim to the widget.
    pub store: String,
    /// Public Storefront API token, passed verbatim to the widget.
    pub public_token: String,
    /// Where the Buy Button SDK script is loaded from.
    pub sdk_url: String,
    /// CSP nonce for the widget init script.
    pub nonce: String,
}

/// Serve a content page by slug.
fn serve_content_page(state: &AppState, slug: &str) -> Result<ContentPageTemplate, AppError> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page {slug}")))?;

    Ok(ContentPageTemplate {
        title: page.meta.title.clone(),
        description: page.meta.description.clone().unwrap_or_default(),
        updated_at: page
            .meta
            .updated_at
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_default(),
        content_html: page.content_html.clone(),
    })
}

/// Display the Chi Siamo page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state))]
pub async fn chi_siamo(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    serve_content_page(&state, "chi-siamo")
}

/// Display the payment page.
///
/// The page mounts the hosted cart widget; everything past the mount point
/// (items, totals, payment) is the widget's business, not ours.
#[instrument(skip(state, nonce))]
pub async fn pagamenti(
    State(state): State<AppState>,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let widget = state.buy_button();

    PaymentPageTemplate {
        store: widget.store().to_string(),
        public_token: widget.public_token().to_string(),
        sdk_url: shopify::BUY_BUTTON_SDK_URL.to_string(),
        nonce,
    }
}
