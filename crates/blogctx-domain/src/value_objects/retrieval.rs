//! Retrieval result value objects

use serde::Serialize;

use crate::entities::Post;

/// Post selected by the retriever
///
/// `score` is the cosine similarity for semantic hits and `0.0` for keyword
/// and fallback hits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredPost {
    pub post: Post,
    pub score: f32,
}

impl ScoredPost {
    pub fn new(post: Post, score: f32) -> Self {
        Self { post, score }
    }

    /// Post selected without a similarity signal
    pub fn unscored(post: Post) -> Self {
        Self { post, score: 0.0 }
    }
}

/// Which tier of the fallback chain produced the selection
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalTier {
    /// Ranked by cosine similarity against the query embedding
    Semantic,
    /// Matched query keywords in title or body
    Keyword,
    /// First posts in store order
    Recent,
    /// The store holds no posts
    Empty,
}

impl std::fmt::Display for RetrievalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Semantic => "semantic",
            Self::Keyword => "keyword",
            Self::Recent => "recent",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Selected posts plus the tier that selected them
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RetrievalOutcome {
    pub tier: RetrievalTier,
    pub posts: Vec<ScoredPost>,
}
