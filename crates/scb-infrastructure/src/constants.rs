//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Catalog rules are defined in `scb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "scb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "scb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SCB";

/// Separator between the prefix and nested keys in environment variables
/// (`SCB__INDEXING__WORKERS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Embedding provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Vector index provider used when none is configured
pub const DEFAULT_VECTOR_INDEX_PROVIDER: &str = "filesystem";

/// Service store provider used when none is configured
pub const DEFAULT_SERVICE_STORE_PROVIDER: &str = "filesystem";

/// Data subdirectory holding vector index snapshots
pub const VECTOR_INDEX_DIR: &str = "vectors";

/// Data subdirectory holding canonical service documents
pub const SERVICE_STORE_DIR: &str = "services";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "SCB_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "scb";

// ============================================================================
// HEALTH CONSTANTS
// ============================================================================

/// Deadline for a single component health check in seconds
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;
