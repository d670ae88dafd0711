//! Tests for provider resolution and the application context
//!
//! The null providers and the memory store keep these offline; the blog
//! listing is served by mockito.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blogctx_domain::ports::Delay;
use blogctx_domain::{Error, RetrievalTier, Role};
use blogctx_infrastructure::config::AppConfig;
use blogctx_infrastructure::di::resolver::embedding_registry_config;
use blogctx_infrastructure::di::{ProviderListing, init_app, init_app_with_delay};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

fn offline_config(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.source.base_url = base_url.to_string();
    config.source.per_page = 2;
    config.embedding.provider = "null".to_string();
    config.generation.provider = "null".to_string();
    config.store.provider = "memory".to_string();
    config.store.path = None;
    config.transcript.path = None;
    config
}

async fn serve_listing(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/wp-json/wp/v2/posts")
        .match_query(Matcher::UrlEncoded("per_page".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "id": 1,
                    "title": { "rendered": "フリーランス" },
                    "excerpt": { "rendered": "<p>独立の話</p>" },
                    "content": { "rendered": "<p>フリーランスの節税</p>" },
                    "link": "https://blog.example/1"
                },
                {
                    "id": 2,
                    "title": { "rendered": "会社員" },
                    "excerpt": { "rendered": "" },
                    "content": { "rendered": "<p>会社員の働き方</p>" },
                    "link": "https://blog.example/2"
                }
            ])
            .to_string(),
        )
        .expect_at_least(1)
        .create_async()
        .await
}

#[test]
fn test_registered_providers_are_listed() {
    let listing = ProviderListing::registered();

    let names = |entries: &[(&'static str, &'static str)]| entries.iter().map(|(n, _)| *n).collect::<Vec<_>>();
    assert!(names(&listing.embedding).contains(&"gemini"));
    assert!(names(&listing.embedding).contains(&"null"));
    assert!(names(&listing.generation).contains(&"gemini"));
    assert!(names(&listing.store).contains(&"memory"));
    assert!(names(&listing.store).contains(&"filesystem"));
}

#[test]
fn test_unknown_provider_fails_bootstrap() {
    let mut config = offline_config("http://localhost:1");
    config.embedding.provider = "nope".to_string();

    let err = init_app(config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("embedding provider"));
}

#[test]
fn test_generation_key_fills_missing_embedding_key() {
    let mut config = AppConfig::default();
    config.generation.api_key = Some("shared".to_string());
    config.embedding.timeout_secs = 9;

    let registry = embedding_registry_config(&config);

    assert_eq!(registry.provider, "gemini");
    assert_eq!(registry.api_key.as_deref(), Some("shared"));
    assert_eq!(registry.timeout_secs, Some(9));
}

#[test]
fn test_gemini_without_key_is_unconfigured() {
    let mut config = offline_config("http://localhost:1");
    config.embedding.provider = "gemini".to_string();
    config.generation.provider = "gemini".to_string();

    let context = init_app(config).unwrap();

    assert!(!context.embedding_provider().is_configured());
    assert!(!context.generation_provider().is_configured());
}

#[tokio::test]
async fn test_sync_then_retrieve_through_context() {
    let mut server = Server::new_async().await;
    let mock = serve_listing(&mut server).await;
    let context = init_app_with_delay(offline_config(&server.url()), Arc::new(NoDelay)).unwrap();

    let report = context.sync_service().sync().await.unwrap();
    assert_eq!(report.fetched, 2);
    assert_eq!(report.embedded, 2);
    assert_eq!(report.failed, 0);

    let second = context.sync_service().sync().await.unwrap();
    assert_eq!(second.skipped, 2);
    assert_eq!(second.embedded, 0);
    mock.assert_async().await;

    let stored = context.knowledge_store().get("1").await.unwrap().unwrap();
    assert_eq!(stored.body, "フリーランスの節税");
    assert!(stored.has_embedding());

    let outcome = context
        .retrieval_service()
        .retrieve_posts("フリーランス")
        .await
        .unwrap();
    assert_eq!(outcome.tier, RetrievalTier::Semantic);
    assert_eq!(outcome.posts.len(), 2);
}

#[tokio::test]
async fn test_chat_round_trip_through_context() {
    let context = init_app_with_delay(offline_config("http://localhost:1"), Arc::new(NoDelay))
        .unwrap();
    let chat = context.chat_service();

    let seeded = chat.load().await.unwrap();
    assert_eq!(seeded.len(), 1);

    let reply = chat.send("hello").await.unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "[null] hello");

    // A second service from the same context shares the transcript store
    let history = context.chat_service().load().await.unwrap();
    assert_eq!(history.len(), 3);

    let reset = chat.reset().await.unwrap();
    assert_eq!(reset.len(), 1);
    assert_eq!(chat.quick_replies().len(), 4);
}

#[tokio::test]
async fn test_filesystem_transcripts_survive_new_context() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = offline_config("http://localhost:1");
    config.transcript.path = Some(dir.path().join("transcripts"));
    config.store.provider = "filesystem".to_string();
    config.store.path = Some(dir.path().join("posts.json"));

    let first = init_app_with_delay(config.clone(), Arc::new(NoDelay)).unwrap();
    first.chat_service().send("persist me").await.unwrap();

    let second = init_app_with_delay(config, Arc::new(NoDelay)).unwrap();
    let history = second.chat_service().load().await.unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.messages()[1].content, "persist me");
    assert!(dir.path().join("transcripts").join("chat_history.json").exists());
}
