//! Tests for the Gemini embedding provider against a mock server

use std::time::Duration;

use blogctx_domain::Error;
use blogctx_domain::ports::EmbeddingProvider;
use blogctx_providers::embedding::GeminiEmbeddingProvider;
use mockito::{Matcher, Server};
use serde_json::json;

const EMBED_PATH: &str = "/v1beta/models/text-embedding-004:embedContent";

fn provider(api_key: &str, base_url: String) -> GeminiEmbeddingProvider {
    GeminiEmbeddingProvider::new(
        api_key.to_string(),
        Some(base_url),
        "text-embedding-004".to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

#[test]
fn test_provider_metadata() {
    let provider = provider("test-key", "https://example.test/".to_string());

    assert_eq!(provider.provider_name(), "gemini");
    assert_eq!(provider.model(), "text-embedding-004");
    assert_eq!(provider.base_url(), "https://example.test");
    assert!(provider.is_configured());
}

#[tokio::test]
async fn test_embed_sends_key_and_parses_values() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({
            "model": "models/text-embedding-004",
            "content": { "parts": [{ "text": "フリーランス 節税の話" }] }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "embedding": { "values": [0.25, -0.5, 1.0] } }).to_string())
        .create_async()
        .await;

    let embedding = provider("test-key", server.url())
        .embed("フリーランス 節税の話")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(embedding.vector, vec![0.25, -0.5, 1.0]);
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, "text-embedding-004");
}

#[tokio::test]
async fn test_rate_limit_maps_to_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("quota exhausted")
        .create_async()
        .await;

    let err = provider("test-key", server.url())
        .embed("text")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Embedding { .. }));
    assert!(err.to_string().contains("rate limit exceeded"), "{err}");
}

#[tokio::test]
async fn test_server_error_and_auth_failure_messages() {
    let mut server = Server::new_async().await;
    let _unavailable = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "flaky".into()))
        .with_status(503)
        .create_async()
        .await;
    let _denied = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "wrong".into()))
        .with_status(401)
        .create_async()
        .await;

    let unavailable = provider("flaky", server.url()).embed("t").await.unwrap_err();
    let denied = provider("wrong", server.url()).embed("t").await.unwrap_err();

    assert!(unavailable.to_string().contains("server error (503)"), "{unavailable}");
    assert!(denied.to_string().contains("authentication failed"), "{denied}");
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let err = provider("test-key", server.url()).embed("t").await.unwrap_err();

    assert!(err.to_string().contains("response parse failed"), "{err}");
}

#[tokio::test]
async fn test_empty_values_are_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"embedding": {"values": []}}"#)
        .create_async()
        .await;

    assert!(provider("test-key", server.url()).embed("t").await.is_err());
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", EMBED_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let provider = provider("  ", server.url());

    assert!(!provider.is_configured());
    assert!(provider.embed("t").await.is_err());
    mock.assert_async().await;
}
