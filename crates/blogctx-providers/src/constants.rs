//! Provider Constants
//!
//! Constants specific to adapter implementations. Behavioural constants live
//! in `blogctx-domain`.

// ============================================================================
// GEMINI CONSTANTS
// ============================================================================

/// Public Gemini API endpoint
pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default embedding model
pub const GEMINI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Default generation model
pub const GEMINI_DEFAULT_GENERATION_MODEL: &str = "gemini-2.0-flash";

/// Wire role for assistant turns
pub const GEMINI_ROLE_MODEL: &str = "model";

/// Wire role for user turns
pub const GEMINI_ROLE_USER: &str = "user";

// ============================================================================
// NULL PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Model name reported by the null embedding provider
pub const NULL_EMBEDDING_MODEL: &str = "null-char-hash";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Default per-request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix for timeout errors
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";

// ============================================================================
// WORDPRESS CONSTANTS
// ============================================================================

/// Posts listing path below the blog base URL
pub const WORDPRESS_POSTS_PATH: &str = "/wp-json/wp/v2/posts";

// ============================================================================
// FILE CONSTANTS
// ============================================================================

/// Extension of transcript blob files
pub const TRANSCRIPT_FILE_EXTENSION: &str = "json";
