//! Security headers middleware.
//!
//! Adds restrictive security headers to every response. The CSP is built
//! per-request because the payment page's widget init script is authorized
//! by nonce, and must allow the hosted commerce surfaces:
//! - the Buy Button SDK from `sdks.shopifycdn.com`
//! - widget iframes and API calls on `*.myshopify.com` / `*.shopify.com`
//! - catalog images, which live on external CDNs

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS},
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: strict-origin-when-cross-origin`
/// - `Content-Security-Policy` - nonce-based, widget surfaces allowed
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let nonce = request
        .extensions()
        .get::<CspNonce>()
        .map(|n| n.value().to_string())
        .unwrap_or_default();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    let csp = build_csp(&nonce);
    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    response
}

/// Build the CSP header value for one request.
///
/// The widget injects its own styles, so `style-src` needs `unsafe-inline`;
/// scripts stay locked to self, the SDK host, and the per-request nonce.
fn build_csp(nonce: &str) -> String {
    format!(
        "default-src 'self'; \
         script-src 'self' 'nonce-{nonce}' https://sdks.shopifycdn.com https://unpkg.com; \
         style-src 'self' 'unsafe-inline'; \
         img-src 'self' https: data:; \
         connect-src 'self' https://*.myshopify.com https://*.shopify.com; \
         frame-src https://*.myshopify.com https://*.shopify.com; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}
