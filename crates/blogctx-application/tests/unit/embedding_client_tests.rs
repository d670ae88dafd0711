//! Tests for the retrying embedding client

use std::sync::Arc;

use blogctx_application::EmbeddingClient;

use crate::mocks::{MockEmbeddingProvider, RecordingDelay, secs};

fn client(provider: &Arc<MockEmbeddingProvider>, delay: &Arc<RecordingDelay>) -> EmbeddingClient {
    EmbeddingClient::new(provider.clone(), delay.clone())
}

#[tokio::test]
async fn test_three_failures_then_success() {
    let provider = Arc::new(MockEmbeddingProvider::failing_first(3, vec![0.5, 0.5]));
    let delay = Arc::new(RecordingDelay::default());

    let embedding = client(&provider, &delay).embed("hello").await;

    assert_eq!(embedding.map(|e| e.vector), Some(vec![0.5, 0.5]));
    assert_eq!(provider.calls(), 4);
    assert_eq!(delay.waits(), secs(&[1, 2, 4]));
}

#[tokio::test]
async fn test_four_failures_give_none() {
    let provider = Arc::new(MockEmbeddingProvider::failing_first(4, vec![0.5, 0.5]));
    let delay = Arc::new(RecordingDelay::default());

    let embedding = client(&provider, &delay).embed("hello").await;

    assert!(embedding.is_none());
    assert_eq!(provider.calls(), 4);
    assert_eq!(delay.waits(), secs(&[1, 2, 4]));
}

#[tokio::test]
async fn test_missing_credentials_skip_the_provider() {
    let provider = Arc::new(MockEmbeddingProvider::unconfigured());
    let delay = Arc::new(RecordingDelay::default());

    let embedding = client(&provider, &delay).embed("hello").await;

    assert!(embedding.is_none());
    assert_eq!(provider.calls(), 0);
    assert!(delay.waits().is_empty());
}

#[tokio::test]
async fn test_text_is_sent_verbatim() {
    let provider = Arc::new(MockEmbeddingProvider::returning(vec![1.0]));
    let delay = Arc::new(RecordingDelay::default());

    client(&provider, &delay).embed("  フリーランス 節税  ").await;

    assert_eq!(provider.texts(), vec!["  フリーランス 節税  ".to_string()]);
}
