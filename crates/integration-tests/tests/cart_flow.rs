//! Integration tests for the cart: add/update/remove/clear across one
//! session, totals, and the checkout handoff to the hosted store.

use nautic_integration_tests::{TEST_STORE, TestServer, client};
use reqwest::StatusCode;

/// POST an add-to-cart and return the count badge fragment.
async fn add_item(client: &reqwest::Client, server: &TestServer, product_id: &str) -> String {
    let resp = client
        .post(server.url("/carrello/add"))
        .form(&[("product_id", product_id)])
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("hx-trigger")
            .expect("HX-Trigger header")
            .to_str()
            .expect("ascii"),
        "cart-updated"
    );
    resp.text().await.expect("fragment")
}

#[tokio::test]
async fn empty_cart_page_shows_empty_state() {
    let server = TestServer::spawn().await;
    let body = client()
        .get(server.url("/carrello"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Il tuo carrello è vuoto"));
}

#[tokio::test]
async fn repeated_adds_accumulate_in_one_session() {
    let server = TestServer::spawn().await;
    let client = client();

    let first = add_item(&client, &server, "barca-001").await;
    assert!(first.contains(">1</span>"));

    let second = add_item(&client, &server, "barca-001").await;
    assert!(second.contains(">2</span>"));

    let third = add_item(&client, &server, "ric-002").await;
    assert!(third.contains(">3</span>"));

    // Two lines, three items: the page shows both names and the merged
    // quantity.
    let body = client
        .get(server.url("/carrello"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Carrello (3 prodotti)"));
    assert!(body.contains("Gommone Marlin 790"));
    assert!(body.contains("Girante pompa acqua"));
    // 48.500 × 2 + 42,50 = 97.042,50
    assert!(body.contains("€97.042,50"));
}

#[tokio::test]
async fn carts_are_per_session() {
    let server = TestServer::spawn().await;
    let first_shopper = client();
    let second_shopper = client();

    add_item(&first_shopper, &server, "barca-001").await;

    let body = second_shopper
        .get(server.url("/carrello"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Il tuo carrello è vuoto"));
}

#[tokio::test]
async fn updating_quantity_to_zero_removes_the_line() {
    let server = TestServer::spawn().await;
    let client = client();

    add_item(&client, &server, "barca-001").await;
    add_item(&client, &server, "ric-002").await;

    let fragment = client
        .post(server.url("/carrello/update"))
        .form(&[("product_id", "barca-001"), ("quantity", "0")])
        .send()
        .await
        .expect("update request")
        .text()
        .await
        .expect("fragment");

    assert!(!fragment.contains("Gommone Marlin 790"));
    assert!(fragment.contains("Girante pompa acqua"));

    let count = client
        .get(server.url("/carrello/count"))
        .send()
        .await
        .expect("count request")
        .text()
        .await
        .expect("fragment");
    assert!(count.contains(">1</span>"));
}

#[tokio::test]
async fn update_recomputes_line_totals() {
    let server = TestServer::spawn().await;
    let client = client();

    add_item(&client, &server, "ric-001").await;

    let fragment = client
        .post(server.url("/carrello/update"))
        .form(&[("product_id", "ric-001"), ("quantity", "3")])
        .send()
        .await
        .expect("update request")
        .text()
        .await
        .expect("fragment");

    // 189 × 3
    assert!(fragment.contains("€567"));
    assert!(fragment.contains("Carrello (3 prodotti)"));
}

#[tokio::test]
async fn remove_and_clear_empty_the_cart() {
    let server = TestServer::spawn().await;
    let client = client();

    add_item(&client, &server, "barca-001").await;
    add_item(&client, &server, "ric-002").await;

    let fragment = client
        .post(server.url("/carrello/remove"))
        .form(&[("product_id", "ric-002")])
        .send()
        .await
        .expect("remove request")
        .text()
        .await
        .expect("fragment");
    assert!(!fragment.contains("Girante pompa acqua"));
    assert!(fragment.contains("Gommone Marlin 790"));

    let cleared = client
        .post(server.url("/carrello/clear"))
        .send()
        .await
        .expect("clear request")
        .text()
        .await
        .expect("fragment");
    assert!(cleared.contains("Il tuo carrello è vuoto"));

    let count = client
        .get(server.url("/carrello/count"))
        .send()
        .await
        .expect("count request")
        .text()
        .await
        .expect("fragment");
    assert!(count.contains(">0</span>"));
}

#[tokio::test]
async fn adding_an_unknown_product_is_404_and_cart_stays_empty() {
    let server = TestServer::spawn().await;
    let client = client();

    let resp = client
        .post(server.url("/carrello/add"))
        .form(&[("product_id", "prodotto-fantasma")])
        .send()
        .await
        .expect("add request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = client
        .get(server.url("/carrello"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains("Il tuo carrello è vuoto"));
}

#[tokio::test]
async fn checkout_with_empty_cart_returns_to_the_cart_page() {
    let server = TestServer::spawn().await;
    let resp = client()
        .get(server.url("/checkout"))
        .send()
        .await
        .expect("checkout request");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get("location")
            .expect("location")
            .to_str()
            .expect("ascii"),
        "/carrello"
    );
}

#[tokio::test]
async fn checkout_redirects_into_the_hosted_store() {
    let server = TestServer::spawn().await;
    let client = client();

    add_item(&client, &server, "barca-001").await;
    add_item(&client, &server, "barca-001").await;
    add_item(&client, &server, "ric-001").await;

    let resp = client
        .get(server.url("/checkout"))
        .send()
        .await
        .expect("checkout request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let location = resp
        .headers()
        .get("location")
        .expect("location")
        .to_str()
        .expect("ascii");
    assert_eq!(
        location,
        format!("https://{TEST_STORE}/cart/8574612001:2,8574612201:1")
    );
}

#[tokio::test]
async fn checkout_without_shopify_ids_warns_and_keeps_the_cart() {
    let server = TestServer::spawn().await;
    let client = client();

    // Neither of these carries a Shopify identifier in the sample catalog.
    add_item(&client, &server, "acc-004").await;
    add_item(&client, &server, "ric-006").await;

    let resp = client
        .get(server.url("/checkout"))
        .send()
        .await
        .expect("checkout request");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get("location")
            .expect("location")
            .to_str()
            .expect("ascii"),
        "/carrello?errore=checkout"
    );

    // The warning renders and the cart is untouched.
    let body = client
        .get(server.url("/carrello?errore=checkout"))
        .send()
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains("identificativo Shopify"));
    assert!(body.contains("Kit sicurezza"));
    assert!(body.contains("Tientibene inox"));
}
