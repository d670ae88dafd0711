//! Infrastructure layer constants
//!
//! Domain limits live in `blogctx_domain::constants`, adapter defaults in
//! `blogctx_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "blogctx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "blogctx";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BLOGCTX";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "BLOGCTX_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "blogctx";

// ============================================================================
// SOURCE CONSTANTS
// ============================================================================

/// Blog base URL used until one is configured
pub const DEFAULT_BLOG_BASE_URL: &str = "http://localhost:8080";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default embedding provider name
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "gemini";

/// Default generation provider name
pub const DEFAULT_GENERATION_PROVIDER: &str = "gemini";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default knowledge store provider name
pub const DEFAULT_STORE_PROVIDER: &str = "filesystem";

/// Knowledge store provider that needs a path
pub const FILESYSTEM_STORE_PROVIDER: &str = "filesystem";

/// Default knowledge store file
pub const DEFAULT_STORE_PATH: &str = ".blogctx/posts.json";

/// Default transcript directory
pub const DEFAULT_TRANSCRIPT_DIR: &str = ".blogctx/transcripts";
