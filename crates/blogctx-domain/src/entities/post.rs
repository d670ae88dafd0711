//! Blog post entities
//!
//! [`SourcePost`] is what the CMS listing returns; [`Post`] is the record the
//! knowledge store keeps, including the cached embedding.

use serde::{Deserialize, Deserializer, Serialize};

/// Entity: Cached Blog Post
///
/// Keyed by `id`. `excerpt` and `body` are already sanitized and truncated.
/// `embedding` is absent until an embedding request succeeds; when present its
/// length is the dimensionality of the model that produced it.
///
/// ## Example
///
/// ```rust
/// use blogctx_domain::Post;
///
/// let post = Post::new("1", "フリーランス", "https://blog.example/1")
///     .with_body("節税の話")
///     .with_embedding(vec![1.0, 0.0]);
/// assert!(post.has_embedding());
/// assert_eq!(post.display_content(), "節税の話");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier from the source CMS
    pub id: String,
    /// Post title
    pub title: String,
    /// Sanitized excerpt
    #[serde(default)]
    pub excerpt: String,
    /// Sanitized body
    #[serde(default)]
    pub body: String,
    /// Public URL of the post
    #[serde(default)]
    pub link: String,
    /// Cached embedding of `"<title> <body>"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    /// Hex SHA-256 of the text the embedding was computed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// RFC 3339 timestamp of the last upsert
    #[serde(default)]
    pub updated_at: String,
}

impl Post {
    /// Create a post with the given identity and empty content
    pub fn new(id: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            ..Self::default()
        }
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the excerpt
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the cached embedding
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Whether a non-empty embedding is cached
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Body, or the excerpt when the body is empty
    pub fn display_content(&self) -> &str {
        if self.body.is_empty() {
            &self.excerpt
        } else {
            &self.body
        }
    }

    /// Apply a merge patch: fields present in the patch overwrite, others are kept
    pub fn merge(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(link) = patch.link {
            self.link = link;
        }
        if let Some(embedding) = patch.embedding {
            self.embedding = Some(embedding);
        }
        if let Some(hash) = patch.content_hash {
            self.content_hash = Some(hash);
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}

/// Partial update for a [`Post`]
///
/// `None` means "leave the stored value untouched", so a failed embedding
/// request never erases an embedding that is already cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub link: Option<String>,
    pub embedding: Option<Vec<f32>>,
    pub content_hash: Option<String>,
    pub updated_at: Option<String>,
}

impl PostPatch {
    /// Materialize the patch into a fresh record with the given id
    pub fn into_post(self, id: impl Into<String>) -> Post {
        let mut post = Post {
            id: id.into(),
            ..Post::default()
        };
        post.merge(self);
        post
    }
}

/// `{ "rendered": "..." }` wrapper used by the WordPress REST API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// Entity: Blog Post as listed by the CMS
///
/// Mirrors one item of `GET /wp-json/wp/v2/posts`. Fields are raw HTML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SourcePost {
    /// CMS identifier; integer IDs are kept as their decimal string
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub link: String,
}

fn string_or_integer<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Int(n) => n.to_string(),
    })
}
