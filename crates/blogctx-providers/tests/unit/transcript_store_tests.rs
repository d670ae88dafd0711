//! Tests for the transcript store implementations

use blogctx_domain::Error;
use blogctx_domain::repositories::TranscriptStore;
use blogctx_providers::transcript::{FilesystemTranscriptStore, InMemoryTranscriptStore};

async fn exercise_round_trip(store: &dyn TranscriptStore) {
    assert!(store.load("chat_history").await.unwrap().is_none());

    store.save("chat_history", r#"[{"role":"user","content":"hi"}]"#).await.unwrap();
    store.save("other", "[]").await.unwrap();

    assert_eq!(
        store.load("chat_history").await.unwrap().as_deref(),
        Some(r#"[{"role":"user","content":"hi"}]"#)
    );

    store.clear("chat_history").await.unwrap();
    store.clear("chat_history").await.unwrap();

    assert!(store.load("chat_history").await.unwrap().is_none());
    assert_eq!(store.load("other").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_in_memory_round_trip() {
    exercise_round_trip(&InMemoryTranscriptStore::new()).await;
}

#[tokio::test]
async fn test_filesystem_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    exercise_round_trip(&FilesystemTranscriptStore::new(dir.path().join("transcripts"))).await;
}

#[tokio::test]
async fn test_filesystem_writes_one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilesystemTranscriptStore::new(dir.path());

    store.save("chat_history", "[]").await.unwrap();

    assert!(dir.path().join("chat_history.json").exists());
}

#[tokio::test]
async fn test_filesystem_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilesystemTranscriptStore::new(dir.path());

    for key in ["../escape", "a/b", "", ".hidden"] {
        let result = store.save(key, "[]").await;
        assert!(matches!(result, Err(Error::InvalidArgument { .. })), "key {key:?}");
    }
}
