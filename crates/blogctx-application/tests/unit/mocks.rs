//! Hand-written port doubles shared by the unit tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use blogctx_application::RetrievalServiceInterface;
use blogctx_domain::entities::Rendered;
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::{
    BlogSource, Delay, EmbeddingProvider, GenerationProvider, GenerationRequest,
};
use blogctx_domain::repositories::KnowledgeStore;
use blogctx_domain::{Embedding, Post, PostPatch, RetrievalOutcome, RetrievalTier, SourcePost};

// ============================================================================
// Delay
// ============================================================================

/// Records requested waits and returns immediately
#[derive(Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

pub fn secs(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_secs).collect()
}

// ============================================================================
// Embedding
// ============================================================================

/// Fails a set number of calls, then returns a fixed vector
pub struct MockEmbeddingProvider {
    vector: Vec<f32>,
    failures_remaining: AtomicUsize,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    configured: bool,
}

impl MockEmbeddingProvider {
    pub fn returning(vector: Vec<f32>) -> Self {
        Self::failing_first(0, vector)
    }

    pub fn failing_first(failures: usize, vector: Vec<f32>) -> Self {
        Self {
            vector,
            failures_remaining: AtomicUsize::new(failures),
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
            configured: true,
        }
    }

    pub fn always_failing() -> Self {
        Self::failing_first(usize::MAX, Vec::new())
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::returning(vec![1.0, 0.0])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().extend(texts.iter().cloned());

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::embedding("simulated outage"));
        }

        Ok(texts
            .iter()
            .map(|_| Embedding::new(self.vector.clone(), "mock"))
            .collect())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Fails a set number of calls, then echoes a fixed reply
pub struct MockGenerationProvider {
    reply: String,
    failures_remaining: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
    configured: bool,
}

impl MockGenerationProvider {
    pub fn replying(reply: &str) -> Self {
        Self::failing_first(0, reply)
    }

    pub fn failing_first(failures: usize, reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            failures_remaining: AtomicUsize::new(failures),
            requests: Mutex::new(Vec::new()),
            configured: true,
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::replying("unused")
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::generation("503 Service Unavailable"));
        }
        Ok(self.reply.clone())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

// ============================================================================
// Blog source
// ============================================================================

/// Serves a fixed listing that tests can edit between runs
#[derive(Default)]
pub struct StaticSource {
    posts: Mutex<Vec<SourcePost>>,
    pub fail: bool,
}

impl StaticSource {
    pub fn new(posts: Vec<SourcePost>) -> Self {
        Self {
            posts: Mutex::new(posts),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn replace(&self, posts: Vec<SourcePost>) {
        *self.posts.lock().unwrap() = posts;
    }
}

#[async_trait]
impl BlogSource for StaticSource {
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<SourcePost>> {
        if self.fail {
            return Err(Error::source("HTTP 500"));
        }
        Ok(self.posts.lock().unwrap().iter().take(limit).cloned().collect())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}

pub fn source_post(id: &str, title: &str, content: &str) -> SourcePost {
    SourcePost {
        id: id.to_string(),
        title: Rendered {
            rendered: title.to_string(),
        },
        excerpt: Rendered {
            rendered: format!("<p>{title}</p>"),
        },
        content: Rendered {
            rendered: content.to_string(),
        },
        link: format!("https://blog.example/{id}"),
    }
}

// ============================================================================
// Stores
// ============================================================================

/// Knowledge store that fails every call
pub struct FailingStore;

#[async_trait]
impl KnowledgeStore for FailingStore {
    async fn get(&self, _id: &str) -> Result<Option<Post>> {
        Err(Error::store("offline"))
    }

    async fn upsert(&self, _id: &str, _patch: PostPatch) -> Result<Post> {
        Err(Error::store("offline"))
    }

    async fn scan(&self) -> Result<Vec<Post>> {
        Err(Error::store("offline"))
    }

    fn store_name(&self) -> &str {
        "failing"
    }
}

// ============================================================================
// Retrieval
// ============================================================================

/// Returns a fixed context block and records queries
pub struct StubRetrieval {
    context: String,
    queries: Mutex<Vec<String>>,
}

impl StubRetrieval {
    pub fn new(context: &str) -> Self {
        Self {
            context: context.to_string(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RetrievalServiceInterface for StubRetrieval {
    async fn retrieve_posts(&self, _query: &str) -> Result<RetrievalOutcome> {
        Ok(RetrievalOutcome {
            tier: RetrievalTier::Empty,
            posts: Vec::new(),
        })
    }

    async fn retrieve(&self, query: &str) -> String {
        self.queries.lock().unwrap().push(query.to_string());
        self.context.clone()
    }
}
