//! Domain layer constants
//!
//! Limits and canned strings that define retrieval and chat behaviour.
//! Adapter-specific constants live in `blogctx-providers`.

// ============================================================================
// SANITIZER CONSTANTS
// ============================================================================

/// Maximum characters kept from a post excerpt
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Maximum characters kept from a post body
pub const BODY_MAX_CHARS: usize = 1000;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

// ============================================================================
// RETRIEVAL CONSTANTS
// ============================================================================

/// Posts kept after semantic scoring
pub const RETRIEVAL_SEMANTIC_TOP_K: usize = 4;

/// Posts kept after keyword matching
pub const RETRIEVAL_KEYWORD_TOP_K: usize = 3;

/// Posts kept when neither semantic nor keyword matching selected anything
pub const RETRIEVAL_FALLBACK_TOP_K: usize = 2;

/// Keyword tokens must be longer than this many characters
pub const KEYWORD_MIN_EXCLUSIVE_LEN: usize = 1;

/// Query separators for keyword matching (besides whitespace)
pub const KEYWORD_SEPARATORS: &[char] = &[',', '、', '。', '?', '？', '!', '！'];

/// Separator between formatted posts in a context block
pub const CONTEXT_BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Returned by the retriever when the knowledge store cannot be read
pub const STORE_UNAVAILABLE_MESSAGE: &str =
    "Failed to load blog articles. Answering without article context.";

// ============================================================================
// SYNC CONSTANTS
// ============================================================================

/// Default number of posts requested from the blog listing endpoint
pub const SYNC_DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// RETRY CONSTANTS
// ============================================================================

/// Retries after the first failed embedding request
pub const EMBEDDING_MAX_RETRIES: u32 = 3;

/// Retries after the first failed generation request
pub const GENERATION_MAX_RETRIES: u32 = 5;

/// Delay before the first retry, doubled for each following one
pub const RETRY_BASE_DELAY_SECS: u64 = 1;

// ============================================================================
// CHAT CONSTANTS
// ============================================================================

/// First assistant message of a fresh transcript
pub const CHAT_GREETING: &str = "Hello! I'm the blog assistant. Ask me anything about careers, \
freelancing, taxes or money, and I'll answer using the articles on this blog.";

/// Reply used when no generation API key is configured
pub const API_KEY_MISSING_NOTICE: &str =
    "The assistant is not configured yet: no API key is set for the generation service.";

/// Reply used when generation failed after every retry
pub const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, I couldn't reach the answer service right now. Please try again in a moment.";

/// Default key under which the transcript blob is stored
pub const TRANSCRIPT_DEFAULT_KEY: &str = "chat_history";

/// Suggested prompts offered before the user types anything
pub const QUICK_REPLIES: &[&str] = &[
    "How do I start freelancing?",
    "What tax deductions can freelancers use?",
    "Should I go back to being an employee?",
    "How much should I save before going independent?",
];

/// Default persona for the generation system instruction
pub const DEFAULT_PERSONA: &str = "You are a friendly assistant for a career and personal finance \
blog. Answer concisely and ground your answer in the articles below. When an article is \
relevant, mention its title and URL. If the articles do not cover the question, say so and \
give general guidance.";
