//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in scb-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// FastEmbed AllMiniLML6V2 / BGE-small dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_SMALL: usize = 384;

/// FastEmbed multilingual-e5-base / BGE-base dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_BASE: usize = 768;

/// FastEmbed multilingual-e5-large / BGE-large dimension
pub const EMBEDDING_DIMENSION_FASTEMBED_LARGE: usize = 1024;

/// FastEmbed default model
pub const FASTEMBED_DEFAULT_MODEL: &str = "multilingual-e5-large";

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama snowflake-arctic-embed dimension
pub const EMBEDDING_DIMENSION_OLLAMA_ARCTIC: usize = 768;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

/// Ollama default server URL
pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Ollama default embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Default timeout for embedding API requests in seconds
pub const EMBEDDING_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Content-Type header value for JSON requests
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// SERVICE STORE CONSTANTS
// ============================================================================

/// File extension of descriptor documents in the filesystem store
pub const SERVICE_DOCUMENT_EXTENSION: &str = "json";
