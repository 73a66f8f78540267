//! Integration tests for the Nautic Service storefront.
//!
//! Unlike unit tests, these boot the complete router - middleware, session
//! layer, templates - on an ephemeral port and drive it over HTTP with
//! reqwest. The cookie jar carries the session cookie, so a client behaves
//! like one shopper with one cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nautic-integration-tests
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use nautic_storefront::config::{ShopifyConfig, StorefrontConfig};
use nautic_storefront::state::AppState;

/// Store domain used by every test server.
pub const TEST_STORE: &str = "nautic-test.myshopify.com";

/// A storefront instance bound to an ephemeral port.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Spawn the app with the sample catalog shipped in the storefront crate.
    pub async fn spawn() -> Self {
        Self::spawn_with_data_dir(storefront_dir().join("data")).await
    }

    /// Spawn the app reading catalog collections from `data_dir`.
    ///
    /// Pointing at a directory that does not exist exercises the
    /// empty-catalog degradation paths.
    pub async fn spawn_with_data_dir(data_dir: PathBuf) -> Self {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            data_dir,
            content_dir: storefront_dir().join("content"),
            catalog_ttl: Duration::from_secs(300),
            shopify: ShopifyConfig {
                store: TEST_STORE.to_string(),
                storefront_public_token: "test-public-token".to_string(),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let state = AppState::new(config).expect("Failed to build application state");
        let app = nautic_storefront::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server error");
        });

        Self { addr }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Client with a cookie jar (one shopper, one cart) that does not follow
/// redirects, so checkout handoffs stay observable.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Path of the storefront crate (for its sample data and content).
fn storefront_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates dir")
        .join("storefront")
}
