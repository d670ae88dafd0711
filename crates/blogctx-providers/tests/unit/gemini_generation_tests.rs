//! Tests for the Gemini generation provider against a mock server

use std::time::Duration;

use blogctx_domain::ports::{GenerationProvider, GenerationRequest};
use blogctx_domain::{Error, Message};
use blogctx_providers::generation::{GeminiGenerationProvider, NullGenerationProvider};
use mockito::{Matcher, Server};
use serde_json::json;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn provider(base_url: String) -> GeminiGenerationProvider {
    GeminiGenerationProvider::new(
        "test-key".to_string(),
        Some(base_url),
        "gemini-2.0-flash".to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

fn request() -> GenerationRequest {
    GenerationRequest {
        system_instruction: "persona\n\ncontext".to_string(),
        messages: vec![
            Message::assistant("greeting"),
            Message::user("q1"),
            Message::assistant("a1"),
            Message::user("q2"),
        ],
    }
}

#[tokio::test]
async fn test_generate_sends_conversation_and_joins_parts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "q1" }] },
                { "role": "model", "parts": [{ "text": "a1" }] },
                { "role": "user", "parts": [{ "text": "q2" }] }
            ],
            "systemInstruction": { "parts": [{ "text": "persona\n\ncontext" }] }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [
                    { "content": { "role": "model", "parts": [{ "text": "Hello " }, { "text": "there" }] } }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = provider(server.url()).generate(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(reply, "Hello there");
}

#[tokio::test]
async fn test_no_candidates_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let err = provider(server.url()).generate(&request()).await.unwrap_err();

    assert!(matches!(err, Error::Generation { .. }));
}

#[tokio::test]
async fn test_server_error_maps_to_generation_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("backend error")
        .create_async()
        .await;

    let err = provider(server.url()).generate(&request()).await.unwrap_err();

    assert!(matches!(err, Error::Generation { .. }));
    assert!(err.to_string().contains("server error (500): backend error"), "{err}");
}

#[tokio::test]
async fn test_null_provider_echoes_last_user_turn() {
    let reply = NullGenerationProvider::new()
        .generate(&request())
        .await
        .unwrap();
    assert_eq!(reply, "[null] q2");
}
