//! Domain layer constants
//!
//! Contains constants that are part of the catalog rules and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `scb_infrastructure::constants`.

// ============================================================================
// INDEXING DOMAIN CONSTANTS
// ============================================================================

/// Prefix prepended to every text before it is embedded.
///
/// E5-family models expect the same prefix on both sides of a comparison.
pub const EMBEDDING_QUERY_PREFIX: &str = "query: ";

/// Default number of concurrent embedding workers per indexing call
pub const INDEXING_DEFAULT_WORKERS: usize = 4;

/// Default per-task embedding timeout in seconds
pub const INDEXING_EMBED_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Default number of hits requested from the vector index
pub const SEARCH_DEFAULT_LIMIT: usize = 5;

/// Upper bound for the number of hits a single search may request
pub const SEARCH_MAX_LIMIT: usize = 20;

// ============================================================================
// VECTOR INDEX CONSTANTS
// ============================================================================

/// Default vector collection name
pub const VECTOR_COLLECTION_DEFAULT: &str = "services";
