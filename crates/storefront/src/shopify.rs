//! Hosted commerce widget boundary.
//!
//! Payment runs entirely on the hosted Shopify store: the payment page
//! embeds the Buy Button SDK in the browser, and checkout redirects the
//! shopper into the hosted cart. This module only builds URLs and embed
//! configuration - the widget's behavior is opaque to the storefront, and
//! no payment detail ever reaches this process.

use nautic_core::{Cart, ShopifyId};
use url::Url;

use crate::config::ShopifyConfig;

/// Where the browser loads the Buy Button SDK from.
pub const BUY_BUTTON_SDK_URL: &str =
    "https://sdks.shopifycdn.com/buy-button/latest/buy-button-storefront.min.js";

/// Handle to the hosted commerce widget.
#[derive(Debug, Clone)]
pub struct BuyButton {
    store: String,
    public_token: String,
}

impl BuyButton {
    /// Create a handle from the widget configuration.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        Self {
            store: config.store.clone(),
            public_token: config.storefront_public_token.clone(),
        }
    }

    /// Hosted store domain, for the widget embed.
    #[must_use]
    pub fn store(&self) -> &str {
        &self.store
    }

    /// Public Storefront API token, for the widget embed.
    #[must_use]
    pub fn public_token(&self) -> &str {
        &self.public_token
    }

    /// The hosted cart page, where the widget sends shoppers.
    #[must_use]
    pub fn cart_page_url(&self) -> String {
        format!("https://{}/cart", self.store)
    }

    /// Cart permalink carrying the Shopify-identified line items.
    ///
    /// Only lines with a Shopify identifier can cross the boundary; numeric
    /// variant ids are preferred, with the product handle as fallback. When
    /// no line qualifies there is nothing the hosted store could check out,
    /// so `None` is returned and the caller keeps the shopper on the cart
    /// page with a warning.
    #[must_use]
    pub fn checkout_url(&self, cart: &Cart) -> Option<Url> {
        let pairs: Vec<String> = cart
            .lines()
            .iter()
            .filter_map(|line| {
                let id = match (&line.shopify_product_id, &line.handle) {
                    (Some(ShopifyId::Numeric(id)), _) => id.to_string(),
                    (Some(ShopifyId::Text(id)), _) => urlencoding::encode(id).into_owned(),
                    (None, Some(handle)) => urlencoding::encode(handle).into_owned(),
                    (None, None) => return None,
                };
                Some(format!("{id}:{}", line.quantity))
            })
            .collect();

        if pairs.is_empty() {
            return None;
        }

        Url::parse(&format!("https://{}/cart/{}", self.store, pairs.join(","))).ok()
    }
}
