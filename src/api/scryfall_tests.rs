//! Tests for the Scryfall API client.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{fetch_card_by_name_from, ScryfallCatalog};
use crate::batch::CardCatalog;
use crate::error::EnrichError;

/// Helper: creates a minimal ScryfallCard JSON value for mock responses.
fn scryfall_card_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "set": "lea",
        "rarity": "rare",
        "colors": [],
        "type_line": "Artifact",
        "prices": { "usd": "800.00", "usd_foil": null }
    })
}

// ── fetch_card_by_name_from ──────────────────────────────────────────

#[tokio::test]
async fn fetch_card_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Black Lotus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scryfall_card_json("Black Lotus")))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result =
        tokio::task::spawn_blocking(move || fetch_card_by_name_from(&base_url, "Black Lotus"))
            .await
            .unwrap();

    let card = result.unwrap();
    assert_eq!(card.name, "Black Lotus");
    assert_eq!(card.set, "lea");
    assert_eq!(card.rarity, "rare");
    assert!(card.colors.is_empty());
    assert_eq!(card.type_line, "Artifact");
    assert_eq!(card.prices.usd.as_deref(), Some("800.00"));
}

#[tokio::test]
async fn fetch_card_urlencodes_the_name() {
    let mock_server = MockServer::start().await;

    // wiremock matches against the decoded query parameter
    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Borrowing 100,000 Arrows"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(scryfall_card_json("Borrowing 100,000 Arrows")),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        fetch_card_by_name_from(&base_url, "Borrowing 100,000 Arrows")
    })
    .await
    .unwrap();

    assert!(result.is_ok(), "Encoded name should still match");
}

#[tokio::test]
async fn fetch_card_404_returns_card_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "object": "error",
            "code": "not_found",
            "details": "No card found with that exact name"
        })))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result =
        tokio::task::spawn_blocking(move || fetch_card_by_name_from(&base_url, "Totally Fake Card"))
            .await
            .unwrap();

    match result {
        Err(EnrichError::CardNotFound(name)) => assert_eq!(name, "Totally Fake Card"),
        other => panic!("Expected CardNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_card_defaults_missing_metadata_fields() {
    let mock_server = MockServer::start().await;

    // Only the name is present; everything else is serde-defaulted
    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "Sparse Card" })),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let result =
        tokio::task::spawn_blocking(move || fetch_card_by_name_from(&base_url, "Sparse Card"))
            .await
            .unwrap();

    let card = result.unwrap();
    assert_eq!(card.set, "");
    assert_eq!(card.rarity, "");
    assert!(card.colors.is_empty());
    assert_eq!(card.type_line, "");
    assert!(card.prices.usd.is_none());
}

// ── ScryfallCatalog ──────────────────────────────────────────────────

#[tokio::test]
async fn catalog_lookup_returns_card_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Black Lotus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scryfall_card_json("Black Lotus")))
        .mount(&mock_server)
        .await;

    let catalog = ScryfallCatalog::with_base_url(mock_server.uri());
    let card = tokio::task::spawn_blocking(move || catalog.lookup("Black Lotus"))
        .await
        .unwrap();

    assert_eq!(card.unwrap().name, "Black Lotus");
}

#[tokio::test]
async fn catalog_lookup_maps_miss_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let catalog = ScryfallCatalog::with_base_url(mock_server.uri());
    let card = tokio::task::spawn_blocking(move || catalog.lookup("Totally Fake Card"))
        .await
        .unwrap();

    assert!(card.is_none());
}

#[tokio::test]
async fn catalog_lookup_maps_server_error_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let catalog = ScryfallCatalog::with_base_url(mock_server.uri());
    let card = tokio::task::spawn_blocking(move || catalog.lookup("Black Lotus"))
        .await
        .unwrap();

    assert!(card.is_none());
}

#[tokio::test]
async fn catalog_lookup_maps_malformed_body_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let catalog = ScryfallCatalog::with_base_url(mock_server.uri());
    let card = tokio::task::spawn_blocking(move || catalog.lookup("Black Lotus"))
        .await
        .unwrap();

    assert!(card.is_none());
}
