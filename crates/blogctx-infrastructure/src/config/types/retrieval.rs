//! Retrieval configuration types

use blogctx_domain::constants::{
    RETRIEVAL_FALLBACK_TOP_K, RETRIEVAL_KEYWORD_TOP_K, RETRIEVAL_SEMANTIC_TOP_K,
};
use serde::{Deserialize, Serialize};

/// Posts kept by each retrieval tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub keyword_top_k: usize,
    pub fallback_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: RETRIEVAL_SEMANTIC_TOP_K,
            keyword_top_k: RETRIEVAL_KEYWORD_TOP_K,
            fallback_top_k: RETRIEVAL_FALLBACK_TOP_K,
        }
    }
}
